//! # vib 子命令 CLI 定义
//!
//! 谐振子振动波函数计算参数。四个物理量中在命令行上给出的视为"固定"，
//! 恰好固定两个才能推导（两个波数不可同时固定）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/vib.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// vib 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum VibOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// Plain-text data tables (.dat)
    Dat,
}

/// vib 子命令参数
#[derive(Args, Debug)]
pub struct VibArgs {
    // ─────────────────────────────────────────────────────────────
    // 物理参数（给出即固定，恰好固定两个）
    // ─────────────────────────────────────────────────────────────
    /// Linear wavenumber v in cm⁻¹ (supplying a value fixes it)
    #[arg(long)]
    pub lin_wn: Option<f64>,

    /// Angular wavenumber w in cm⁻¹ (supplying a value fixes it)
    #[arg(long)]
    pub ang_wn: Option<f64>,

    /// Force constant k in N/m (supplying a value fixes it)
    #[arg(short = 'k', long)]
    pub force_constant: Option<f64>,

    /// Reduced mass in g/mol (supplying a value fixes it)
    #[arg(short = 'm', long)]
    pub reduced_mass: Option<f64>,

    /// Maximum quantum number n
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=25))]
    pub max_n: u32,

    // ─────────────────────────────────────────────────────────────
    // 输出参数
    // ─────────────────────────────────────────────────────────────
    /// Output file path
    #[arg(short, long, default_value = "waveplot_harmonic.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<VibOutputFormat>,

    /// Additionally export the computed data tables to this .dat file
    #[arg(long)]
    pub data_out: Option<PathBuf>,

    /// Skip plot generation (still prints the state-energy table)
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    // ─────────────────────────────────────────────────────────────
    // 绘图样式参数
    // ─────────────────────────────────────────────────────────────
    /// Vertical scale factor applied to wavefunctions
    #[arg(long, default_value_t = 0.01)]
    pub wf_scale: f64,

    /// Do not draw the harmonic potential curve
    #[arg(long, default_value_t = false)]
    pub hide_potential: bool,

    /// Do not draw the state energy levels
    #[arg(long, default_value_t = false)]
    pub hide_states: bool,

    /// Do not draw the wavefunctions
    #[arg(long, default_value_t = false)]
    pub hide_wavefunctions: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot
    #[arg(long, default_value = "Harmonic oscillator")]
    pub title: String,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// CSV manifest for batch mode (columns: name,force_constant,reduced_mass,max_n)
    #[arg(long)]
    pub jobs_file: Option<PathBuf>,

    /// Output directory (batch mode)
    #[arg(long, default_value = "waveplot_batch")]
    pub output_dir: PathBuf,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files (batch mode)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
