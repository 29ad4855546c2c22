//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `harmonic/`, `orbital/`, `models/`, `utils/`
//! - 子模块: vib, orbital

pub mod orbital;
pub mod vib;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Vib(args) => vib::execute(args),
        Commands::Orbital(args) => orbital::execute(args),
    }
}
