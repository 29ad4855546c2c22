//! # 类氢原子径向波函数计算
//!
//! 实现径向波函数 R_nl(r) 的闭式求值：
//!
//! R_nl(r) = N·exp(−ρ/2)·ρ^l·L_{n−l−1}^{2l+1}(ρ)，ρ = 2Zr/n（r 以 a₀ 计），
//! N = (2Z/n)^{3/2}·sqrt((n−l−1)!/(2n·(n+l)!))
//!
//! 缔合 Laguerre 多项式用标准三项递推迭代求值。归一化满足
//! ∫ R² r² dr = 1。
//!
//! ## 依赖关系
//! - 被 `commands/orbital.rs` 调用
//! - 使用 `models/dataset.rs` 的 RadialDataset, RadialKind

use crate::error::{Result, WaveplotError};
use crate::models::{RadialDataset, RadialKind};

/// n! 作为浮点数
fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// 缔合 Laguerre 多项式 L_n^k(x)
///
/// 三项递推: i·L_i = (2i−1+k−x)·L_{i−1} − (i−1+k)·L_{i−2}
pub fn associated_laguerre(n: u32, k: u32, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return 1.0 + k as f64 - x;
    }

    let mut l_nm2 = 1.0;
    let mut l_nm1 = 1.0 + k as f64 - x;
    for i in 2..=n {
        let i_f = i as f64;
        let k_f = k as f64;
        let l_n = ((2.0 * i_f - 1.0 + k_f - x) * l_nm1 - (i_f - 1.0 + k_f) * l_nm2) / i_f;
        l_nm2 = l_nm1;
        l_nm1 = l_n;
    }
    l_nm1
}

/// 径向波函数计算器
pub struct RadialCalculator {
    /// 主量子数 n ≥ 1
    n: u32,
    /// 角量子数 l < n
    l: u32,
    /// 核电荷数 Z > 0
    z: f64,
}

impl RadialCalculator {
    /// 创建计算器并校验量子数
    pub fn new(n: u32, l: u32, z: f64) -> Result<Self> {
        if n == 0 {
            return Err(WaveplotError::InvalidQuantumNumbers(
                "principal quantum number n must be >= 1".to_string(),
            ));
        }
        if l >= n {
            return Err(WaveplotError::InvalidQuantumNumbers(format!(
                "angular quantum number l must satisfy l < n (got n = {}, l = {})",
                n, l
            )));
        }
        if z <= 0.0 {
            return Err(WaveplotError::InvalidQuantumNumbers(format!(
                "nuclear charge Z must be positive (got {})",
                z
            )));
        }
        Ok(Self { n, l, z })
    }

    /// 径向波函数 R_nl(r)，r 以 a₀ 计
    pub fn radial_wavefunction(&self, r_a0: f64) -> f64 {
        let n = self.n as f64;

        let rho = 2.0 * self.z * r_a0 / n;
        let prefactor = (2.0 * self.z / n).powf(1.5);
        let num = factorial(self.n - self.l - 1);
        let den = 2.0 * n * factorial(self.n + self.l);
        let norm = prefactor * (num / den).sqrt();

        let laguerre = associated_laguerre(self.n - self.l - 1, 2 * self.l + 1, rho);
        norm * (-rho * 0.5).exp() * rho.powi(self.l as i32) * laguerre
    }

    /// 默认径向网格上界 (a₀)，覆盖外层尾部
    pub fn default_r_max(&self) -> f64 {
        let n = self.n as f64;
        (1.5 * n * n + 10.0 * n) / self.z
    }

    /// 在 [0, r_max] 等距网格上计算数据集
    pub fn calculate(&self, kind: RadialKind, r_max: f64, points: usize) -> RadialDataset {
        let points = points.max(2);
        let step = r_max / (points - 1) as f64;
        let r: Vec<f64> = (0..points).map(|i| i as f64 * step).collect();

        let values: Vec<f64> = r
            .iter()
            .map(|&ri| {
                let rw = self.radial_wavefunction(ri);
                match kind {
                    RadialKind::Wavefunction => rw,
                    RadialKind::DistributionFunction => ri * ri * rw * rw,
                }
            })
            .collect();

        RadialDataset {
            r,
            values,
            n: self.n,
            l: self.l,
            z: self.z,
            kind,
        }
    }
}
