//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `vib`: 谐振子振动波函数计算与绘图
//! - `orbital`: 类氢原子径向波函数计算与绘图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: vib, orbital

pub mod orbital;
pub mod vib;

use clap::{Parser, Subcommand};

/// Waveplot - 量子波函数绘图工具箱
#[derive(Parser)]
#[command(name = "waveplot")]
#[command(version)]
#[command(about = "A quantum-mechanical wavefunction plotting toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute and plot quantum harmonic oscillator vibrational wavefunctions
    Vib(vib::VibArgs),

    /// Compute and plot hydrogenic radial wavefunctions
    Orbital(orbital::OrbitalArgs),
}
