//! # 数据模型模块
//!
//! 定义统一的物理参数和计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `harmonic/`, `orbital/`, `commands/` 使用
//! - 子模块: parameters, dataset

pub mod dataset;
pub mod parameters;

pub use dataset::{HarmonicDataset, RadialDataset, RadialKind, VibJob};
pub use parameters::{DisplayValues, ParameterInput, ResolvedParameters, Resolution};
