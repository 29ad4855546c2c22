//! # orbital 子命令 CLI 定义
//!
//! 类氢原子径向波函数计算参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/orbital.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 径向函数类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum RadialPlotKind {
    /// Radial wavefunction R(r)
    #[default]
    Wavefunction,
    /// Radial distribution function r²R(r)²
    Rdf,
}

/// orbital 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OrbitalOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// Plain-text data table (.dat)
    Dat,
}

/// orbital 子命令参数
#[derive(Args, Debug)]
pub struct OrbitalArgs {
    /// Principal quantum number n (>= 1)
    #[arg(short = 'n', long)]
    pub n: u32,

    /// Angular quantum number l (< n)
    #[arg(short = 'l', long)]
    pub l: u32,

    /// Nuclear charge Z (hydrogen-like ions)
    #[arg(short = 'z', long, default_value_t = 1.0)]
    pub z: f64,

    /// Which radial function to compute
    #[arg(long, value_enum, default_value = "wavefunction")]
    pub kind: RadialPlotKind,

    /// Upper bound of the radial grid in a₀ (default chosen from n and Z)
    #[arg(long)]
    pub r_max: Option<f64>,

    /// Number of radial grid points
    #[arg(long, default_value_t = 500)]
    pub points: usize,

    /// Output file path
    #[arg(short, long, default_value = "waveplot_radial.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OrbitalOutputFormat>,

    /// Additionally export the computed data table to this .dat file
    #[arg(long)]
    pub data_out: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: built from n, l, Z)
    #[arg(long)]
    pub title: Option<String>,
}
