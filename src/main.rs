//! # Waveplot - 量子波函数绘图工具箱
//!
//! 量子力学波函数的计算、绘图与数据导出，统一成单一可执行文件。
//!
//! ## 子命令
//! - `vib`     - 谐振子振动波函数（参数解析、能级、Hermite 波函数、绘图、导出）
//! - `orbital` - 类氢原子径向波函数与径向分布函数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── harmonic/   (谐振子计算核心)
//!   ├── orbital/    (径向波函数计算)
//!   ├── models/     (数据模型)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod harmonic;
mod models;
mod orbital;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
