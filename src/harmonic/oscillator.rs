//! # 谐振子模型
//!
//! 实现量子谐振子能级、经典谐振势与归一化波函数的计算。
//!
//! ## 算法概述
//! 1. 频率 ν = sqrt(k/m)/2π
//! 2. 量子态能量 E_n = hν(n + 1/2)，n = 0..=max_n
//! 3. 经典势 V(x) = ½kx²，网格取 ±1.2× 最高态经典转折点，100 个等距点
//! 4. 波函数 ψ_n(x) = H_n(βx)·N_n·exp(−β²x²/2)，H_n 为物理学家 Hermite 多项式
//!
//! Hermite 多项式按定义直接递归求值（数组输入，不做记忆化），
//! max_n ≤ 25 时开销可以忽略。
//!
//! ## 依赖关系
//! - 被 `commands/vib.rs` 调用
//! - 使用 `models/` 的 ResolvedParameters, HarmonicDataset

use crate::harmonic::{LIGHT, PLANCK, WAVENUMBER_TO_JOULE};
use crate::models::{HarmonicDataset, ResolvedParameters, Resolution};

use std::f64::consts::PI;

/// 最高允许的量子数
pub const MAX_N: u32 = 25;

/// 位移网格点数
pub const GRID_POINTS: usize = 100;

/// n 阶物理学家 Hermite 多项式在一组 x 上的取值
///
/// H_0 = 1, H_1 = 2x, H_k = 2x·H_{k−1} − 2(k−1)·H_{k−2}
pub fn hermite(n: u32, x: &[f64]) -> Vec<f64> {
    match n {
        0 => vec![1.0; x.len()],
        1 => x.iter().map(|&xi| 2.0 * xi).collect(),
        _ => {
            let h1 = hermite(n - 1, x);
            let h2 = hermite(n - 2, x);
            x.iter()
                .zip(h1.iter().zip(h2.iter()))
                .map(|(&xi, (&a, &b))| 2.0 * xi * a - 2.0 * (n - 1) as f64 * b)
                .collect()
        }
    }
}

/// n! 作为浮点数
fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// n 个等距点覆盖 [start, stop]
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// 谐振子计算器
pub struct HarmonicCalculator {
    /// 力常数 k (N/m)
    force_constant: f64,
    /// 折合质量 (kg)
    reduced_mass_kg: f64,
    /// 角波数 (cm⁻¹)，波函数宽度参数 β 由此而来
    ang_wn: f64,
}

impl HarmonicCalculator {
    /// 从解析完成的物理参数创建计算器
    pub fn new(params: &ResolvedParameters) -> Self {
        Self {
            force_constant: params.force_constant,
            reduced_mass_kg: params.reduced_mass_kg,
            ang_wn: params.ang_wn,
        }
    }

    /// 计算量子态能量、经典势与位移网格
    ///
    /// 返回 (量子态能量 (J), 谐振势 (J), 位移 (m))。网格关于零点对称，
    /// 跨度为最高态经典转折点的 ±1.2 倍。转折点含零点能项 (max_n + 0.5)，
    /// 故 max_n = 0 时仍然良定义。
    pub fn energies(&self, max_n: u32) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let k = self.force_constant;
        let m = self.reduced_mass_kg;

        let nu = (k / m).sqrt() / (2.0 * PI);

        let state_e: Vec<f64> = (0..=max_n)
            .map(|n| PLANCK * nu * (n as f64 + 0.5))
            .collect();

        // 经典转折点: E = 1/2 k x²
        let max_x = ((max_n as f64 + 0.5) * 2.0 * PLANCK * nu / k).sqrt();

        let displacement = linspace(-max_x * 1.2, max_x * 1.2, GRID_POINTS);
        let potential: Vec<f64> = displacement.iter().map(|&x| 0.5 * k * x * x).collect();

        (state_e, potential, displacement)
    }

    /// n 态归一化波函数在位移网格上的取值
    ///
    /// ψ_n(x) = H_n(βx)·N_n·exp(−β²x²/2)，β = sqrt(mω/h)，
    /// N_n = 1/sqrt(2ⁿ n!)·(mω/πh)^(1/4)，ω = 角波数 × c (s⁻¹)。
    pub fn wavefunction(&self, n: u32, x: &[f64]) -> Vec<f64> {
        let m = self.reduced_mass_kg;
        let omega = self.ang_wn * LIGHT;

        let beta = (m * omega / PLANCK).sqrt();

        let scaled: Vec<f64> = x.iter().map(|&xi| beta * xi).collect();
        let h = hermite(n, &scaled);

        let norm = 1.0 / (2_f64.powi(n as i32) * factorial(n)).sqrt()
            * ((m * omega) / (PI * PLANCK)).powf(0.25);

        h.iter()
            .zip(x.iter())
            .map(|(&hi, &xi)| hi * norm * (-beta * beta * xi * xi * 0.5).exp())
            .collect()
    }

    /// 组装完整数据集：能量与势转换为 cm⁻¹，位移保持米
    pub fn calculate(&self, max_n: u32) -> HarmonicDataset {
        let (state_e, potential, displacement) = self.energies(max_n);

        let state_energies: Vec<f64> =
            state_e.iter().map(|&e| e / WAVENUMBER_TO_JOULE).collect();
        let potential: Vec<f64> = potential
            .iter()
            .map(|&e| e / WAVENUMBER_TO_JOULE)
            .collect();

        let wavefunctions: Vec<Vec<f64>> = (0..=max_n)
            .map(|n| self.wavefunction(n, &displacement))
            .collect();

        HarmonicDataset {
            x: displacement,
            wavefunctions,
            state_energies,
            potential,
        }
    }
}

/// 从参数解析结果计算数据集
///
/// 解析失败（参数未就绪）时返回 `None`，作为显式的"无新数据"信号，
/// 下游绘图与导出按无操作处理。
pub fn calculate_dataset(resolution: &Resolution, max_n: u32) -> Option<HarmonicDataset> {
    let params = resolution.resolved.as_ref()?;
    Some(HarmonicCalculator::new(params).calculate(max_n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonic::resolver::resolve_parameters;
    use crate::models::ParameterInput;

    fn hcl_like() -> Resolution {
        resolve_parameters(&ParameterInput {
            lin_wn: 0.0,
            ang_wn: 0.0,
            force_constant: 480.0,
            reduced_mass: 0.9768,
            lin_wn_fixed: false,
            ang_wn_fixed: false,
            force_constant_fixed: true,
            reduced_mass_fixed: true,
        })
    }

    #[test]
    fn test_hermite_low_orders() {
        let x = [-2.0, -0.5, 0.0, 0.5, 2.0];

        let h0 = hermite(0, &x);
        let h1 = hermite(1, &x);
        let h2 = hermite(2, &x);

        for (i, &xi) in x.iter().enumerate() {
            assert_eq!(h0[i], 1.0);
            assert_eq!(h1[i], 2.0 * xi);
            assert!((h2[i] - (4.0 * xi * xi - 2.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_energies_increasing_equal_spacing() {
        let resolution = hcl_like();
        let dataset = calculate_dataset(&resolution, 5).unwrap();
        let e = &dataset.state_energies;

        assert_eq!(e.len(), 6);
        let spacing = e[1] - e[0];
        for w in e.windows(2) {
            assert!(w[1] > w[0]);
            assert!(((w[1] - w[0]) - spacing).abs() < 1e-9 * spacing.abs());
        }

        // 能级间距 hν 即线性波数 (cm⁻¹)
        assert!((spacing - 2888.12).abs() < 1.0);
    }

    #[test]
    fn test_wavefunction_normalization() {
        let resolution = hcl_like();
        let params = resolution.resolved.as_ref().unwrap();
        let calc = HarmonicCalculator::new(params);
        let (_, _, x) = calc.energies(5);
        let dx = x[1] - x[0];

        for n in 0..=5 {
            let wf = calc.wavefunction(n, &x);
            // 梯形积分 ∫|ψ|² dx
            let mut integral = 0.0;
            for w in wf.windows(2) {
                integral += 0.5 * (w[0] * w[0] + w[1] * w[1]) * dx;
            }
            assert!(
                (integral - 1.0).abs() < 0.05,
                "n = {}: integral = {}",
                n,
                integral
            );
        }
    }

    #[test]
    fn test_end_to_end_hcl_like() {
        let resolution = hcl_like();
        let dataset = calculate_dataset(&resolution, 5).unwrap();

        assert_eq!(dataset.x.len(), GRID_POINTS);
        assert_eq!(dataset.potential.len(), GRID_POINTS);
        assert_eq!(dataset.wavefunctions.len(), 6);
        for wf in &dataset.wavefunctions {
            assert_eq!(wf.len(), GRID_POINTS);
        }
        assert_eq!(dataset.max_n(), 5);
    }

    #[test]
    fn test_ground_state_only() {
        // max_n = 0: 单一基态，转折点由零点能项保证非零
        let resolution = hcl_like();
        let dataset = calculate_dataset(&resolution, 0).unwrap();

        assert_eq!(dataset.state_energies.len(), 1);
        assert!(dataset.state_energies[0] > 0.0);
        assert_eq!(dataset.x.len(), GRID_POINTS);
        assert!(dataset.x[0] < 0.0 && dataset.x[GRID_POINTS - 1] > 0.0);
    }

    #[test]
    fn test_unresolved_parameters_yield_no_dataset() {
        let mut input = ParameterInput {
            lin_wn: 2888.0,
            ang_wn: 18145.84,
            force_constant: 480.0,
            reduced_mass: 0.9768,
            lin_wn_fixed: true,
            ang_wn_fixed: true,
            force_constant_fixed: false,
            reduced_mass_fixed: false,
        };
        let resolution = resolve_parameters(&input);
        assert!(calculate_dataset(&resolution, 5).is_none());

        input.ang_wn_fixed = false;
        input.force_constant_fixed = true;
        input.reduced_mass_fixed = true;
        let resolution = resolve_parameters(&input);
        assert!(calculate_dataset(&resolution, 5).is_none());
    }
}
