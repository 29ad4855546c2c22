//! # 径向波函数数据导出
//!
//! 导出径向函数数据为纯文本表格，格式与谐振子导出一致：
//! 工具名称头 + (r, 函数值) 对照表。数据集缺失时导出是无操作。
//!
//! ## 依赖关系
//! - 被 `commands/orbital.rs` 调用
//! - 使用 `models/dataset.rs` 的 RadialDataset

use crate::error::{Result, WaveplotError};
use crate::models::{RadialDataset, RadialKind};

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// 生成导出报告文本
pub fn render_report(dataset: Option<&RadialDataset>) -> Option<String> {
    let data = dataset?;

    let mut out = String::new();

    out.push_str("Radial wavefunction data calculated using waveplot\n");

    let label = match data.kind {
        RadialKind::Wavefunction => "R(r)",
        RadialKind::DistributionFunction => "r^2 R(r)^2",
    };
    let _ = writeln!(
        out,
        "\nn = {}, l = {}, Z = {}\n\nr (a0), {}",
        data.n, data.l, data.z, label
    );

    for (&r, &v) in data.r.iter().zip(data.values.iter()) {
        let _ = writeln!(out, "{:.8}, {:.8}", r, v);
    }

    Some(out)
}

/// 将报告写入文件，返回是否实际写入
pub fn write_dat(dataset: Option<&RadialDataset>, output_path: &Path) -> Result<bool> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::RadialCalculator;

    #[test]
    fn test_report_contains_quantum_numbers() {
        let calc = RadialCalculator::new(2, 1, 1.0).unwrap();
        let ds = calc.calculate(RadialKind::Wavefunction, 20.0, 100);
        let text = render_report(Some(&ds)).unwrap();

        assert!(text.contains("n = 2, l = 1, Z = 1"));

        let rows = text
            .split("r (a0), R(r)\n")
            .nth(1)
            .unwrap()
            .lines()
            .filter(|l| !l.is_empty())
            .count();
        assert_eq!(rows, 100);
    }

    #[test]
    fn test_missing_dataset_is_noop() {
        assert!(render_report(None).is_none());
    }
}
