//! # 谐振子物理参数数据模型
//!
//! 四个物理量 {线性波数, 角波数, 力常数, 折合质量} 中恰好两个被用户固定，
//! 另外两个由封闭公式推导。
//!
//! ## 依赖关系
//! - 被 `harmonic/resolver.rs` 使用
//! - 被 `commands/vib.rs` 使用

use serde::{Deserialize, Serialize};

/// 参数解析器的输入：四个数值与四个"固定"标志
///
/// 数值单位：波数 cm⁻¹，力常数 N/m，折合质量 g/mol。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParameterInput {
    /// 线性波数 v (cm⁻¹)
    pub lin_wn: f64,

    /// 角波数 w (cm⁻¹)
    pub ang_wn: f64,

    /// 力常数 k (N/m)
    pub force_constant: f64,

    /// 折合质量 mu (g/mol)
    pub reduced_mass: f64,

    /// 固定标志（true = 用户指定，作为推导依据）
    pub lin_wn_fixed: bool,
    pub ang_wn_fixed: bool,
    pub force_constant_fixed: bool,
    pub reduced_mass_fixed: bool,
}

impl ParameterInput {
    /// 固定参数个数
    pub fn fixed_count(&self) -> usize {
        [
            self.lin_wn_fixed,
            self.ang_wn_fixed,
            self.force_constant_fixed,
            self.reduced_mass_fixed,
        ]
        .iter()
        .filter(|&&f| f)
        .count()
    }

    /// 两个波数同时固定在本领域内是无效组合（二者严格相关）
    pub fn both_wavenumbers_fixed(&self) -> bool {
        self.lin_wn_fixed && self.ang_wn_fixed
    }
}

/// 推导完成的物理参数（内部单位）
///
/// 质量以 kg 存储，仅在展示层转换为 g/mol。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    /// 线性波数 v (cm⁻¹)
    pub lin_wn: f64,

    /// 角波数 w (cm⁻¹)
    pub ang_wn: f64,

    /// 力常数 k (N/m)
    pub force_constant: f64,

    /// 折合质量 (kg)
    pub reduced_mass_kg: f64,
}

/// 展示用的四个取整数值
///
/// 波数与力常数保留 2 位小数，质量 (g/mol) 保留 4 位。
/// 无论推导是否成功都会生成。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayValues {
    pub lin_wn: f64,
    pub ang_wn: f64,
    pub force_constant: f64,
    pub reduced_mass: f64,
}

/// 参数解析结果
///
/// `resolved` 为 `None` 表示固定参数组合无效，下游计算应跳过。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// 取整后的展示值
    pub display: DisplayValues,

    /// 各字段可编辑标志（固定字段可编辑，推导字段锁定）
    pub lin_wn_editable: bool,
    pub ang_wn_editable: bool,
    pub force_constant_editable: bool,
    pub reduced_mass_editable: bool,

    /// 推导结果；`None` = 未就绪
    pub resolved: Option<ResolvedParameters>,
}

impl Resolution {
    /// 推导是否成功
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}
