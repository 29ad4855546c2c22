//! # 类氢原子径向波函数模块
//!
//! 提供类氢离子径向波函数 R_nl(r) 与径向分布函数 r²R² 的计算、
//! 绘图与导出功能。长度单位为玻尔半径 a₀。
//!
//! ## 子模块
//! - `radial`: 径向波函数计算（缔合 Laguerre 递推）
//! - `plot`: 图表渲染
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/orbital.rs` 使用
//! - 使用 `models/dataset.rs` 的 RadialDataset

pub mod export;
pub mod plot;
pub mod radial;

pub use radial::RadialCalculator;
