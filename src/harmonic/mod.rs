//! # 谐振子计算模块
//!
//! 提供量子谐振子的参数解析、能级与波函数计算、绘图与数据导出功能。
//!
//! ## 子模块
//! - `resolver`: 物理参数解析（固定两个参数推导其余两个）
//! - `oscillator`: 能级、谐振势与 Hermite 波函数计算
//! - `plot`: 图表装配与渲染
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/vib.rs` 使用
//! - 使用 `models/` 的数据模型

pub mod export;
pub mod oscillator;
pub mod plot;
pub mod resolver;

pub use oscillator::HarmonicCalculator;
pub use resolver::resolve_parameters;

/// 光速 c (cm/s)，用于波数 (cm⁻¹) 与频率 (s⁻¹) 互换
pub const LIGHT: f64 = 2.99792458e10;

/// Planck 常数 h (J·s)
pub const PLANCK: f64 = 6.62607015e-34;

/// 1 cm⁻¹ 对应的能量 (J)
pub const WAVENUMBER_TO_JOULE: f64 = 1.98630e-23;

/// 原子质量单位 (kg)，g/mol 与 kg 互换
pub const AMU_KG: f64 = 1.6605e-27;

/// 米 → Å 转换因子
///
/// 字面值 10×10¹⁰（即 1e11），与既有数据文件逐位兼容；
/// 仅在展示层（绘图、导出）应用一次。
pub const ANGSTROM_PER_M: f64 = 10e10;
