//! # 计算结果数据模型
//!
//! 计算、绘图与导出之间传递的数据单元。数据缺失以 `Option<HarmonicDataset>`
//! 表达（显式的"无新数据"信号），而不是错误。
//!
//! ## 依赖关系
//! - 被 `harmonic/` 与 `orbital/` 产出
//! - 被 `commands/` 消费

use serde::{Deserialize, Serialize};

/// 谐振子计算结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicDataset {
    /// 位移网格（米），100 点，关于零点对称
    pub x: Vec<f64>,

    /// 各量子态的归一化波函数，`wavefunctions[n]` 与 `x` 对齐
    pub wavefunctions: Vec<Vec<f64>>,

    /// 量子态能量 E_n (cm⁻¹)，n = 0..=max_n
    pub state_energies: Vec<f64>,

    /// 经典谐振势 V(x) (cm⁻¹)，与 `x` 对齐
    pub potential: Vec<f64>,
}

impl HarmonicDataset {
    /// 最高量子数
    pub fn max_n(&self) -> usize {
        self.state_energies.len().saturating_sub(1)
    }
}

/// 径向波函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadialKind {
    /// 径向波函数 R_nl(r)
    Wavefunction,
    /// 径向分布函数 r²R_nl(r)²
    DistributionFunction,
}

/// 类氢原子径向函数计算结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialDataset {
    /// 径向网格 (a₀ 单位)
    pub r: Vec<f64>,

    /// 函数值，与 `r` 对齐
    pub values: Vec<f64>,

    /// 主量子数
    pub n: u32,

    /// 角量子数
    pub l: u32,

    /// 核电荷数
    pub z: f64,

    /// 函数类型
    pub kind: RadialKind,
}

/// 批量模式作业行（CSV 清单中的一行）
///
/// 批量模式下力常数与折合质量恒为固定参数。
#[derive(Debug, Clone, Deserialize)]
pub struct VibJob {
    /// 作业名，用作输出文件名前缀
    pub name: String,

    /// 力常数 k (N/m)
    pub force_constant: f64,

    /// 折合质量 (g/mol)
    pub reduced_mass: f64,

    /// 最高量子数 (0-25)
    pub max_n: u32,
}
