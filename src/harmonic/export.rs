//! # 谐振子数据导出
//!
//! 将计算结果导出为固定顺序的纯文本报告：
//! 1. 工具名称头
//! 2. 量子态能量 (cm⁻¹)，每行一个，6 位小数
//! 3. 位移 (Å) 与谐振势对照表
//! 4. 位移 (Å) 与各波函数取值对照表（逐网格点一行，逗号分隔，8 位小数）
//!
//! 数据集缺失时导出是无操作（返回 `None`，不产生空文件）。
//!
//! ## 依赖关系
//! - 被 `commands/vib.rs` 调用
//! - 使用 `models/dataset.rs` 的 HarmonicDataset

use crate::error::{Result, WaveplotError};
use crate::harmonic::ANGSTROM_PER_M;
use crate::models::HarmonicDataset;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// 生成导出报告文本
///
/// 数据集缺失时返回 `None`（"无可导出"信号）。
pub fn render_report(dataset: Option<&HarmonicDataset>) -> Option<String> {
    let data = dataset?;

    let mut out = String::new();

    out.push_str("Vibrational wavefunction data calculated using waveplot\n");

    out.push_str("\nState energies (cm-1)\n");
    for &e in &data.state_energies {
        let _ = writeln!(out, "{:.6}", e);
    }

    out.push_str("\nDisplacement (A), Harmonic potential (cm-1)\n");
    for (&x, &v) in data.x.iter().zip(data.potential.iter()) {
        let _ = writeln!(out, "{:.6}, {:.6}", x * ANGSTROM_PER_M, v);
    }

    out.push_str("\nDisplacement (A), Harmonic Wavefunction for n=0, n=1, ...\n");
    for (i, &x) in data.x.iter().enumerate() {
        let _ = write!(out, "{:.8}, ", x * ANGSTROM_PER_M);
        for wf in &data.wavefunctions {
            let _ = write!(out, "{:.8}, ", wf[i]);
        }
        out.push('\n');
    }

    Some(out)
}

/// 将报告写入文件
///
/// 返回是否实际写入（数据集缺失时为 `false`）。
pub fn write_dat(dataset: Option<&HarmonicDataset>, output_path: &Path) -> Result<bool> {
    match render_report(dataset) {
        Some(text) => {
            fs::write(output_path, text).map_err(|e| WaveplotError::FileWriteError {
                path: output_path.display().to_string(),
                source: e,
            })?;
            Ok(true)
        }
        None => Ok(false),
    }
}
