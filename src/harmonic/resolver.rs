//! # 物理参数解析器
//!
//! 四个物理量 {线性波数 v, 角波数 w, 力常数 k, 折合质量 mu} 中固定两个，
//! 通过封闭公式推导其余两个。所有频率经角频率 ω (s⁻¹) 中转。
//!
//! ## 解析规则
//! - w 固定（v 未固定）: ω = w·c, v = w/2π
//! - v 固定（w 未固定）: ω = v·2π·c, w = v·2π
//! - 两个波数均未固定（k、mu 固定）: w = sqrt(k/m)/c, v = w/2π
//! - 再由 ω 推导未固定的 k 或 mu: m = k/ω², k = m·ω²
//!
//! 固定个数 ≠ 2 或两个波数同时固定为无效组合：推导值清空，
//! 但展示值仍然取整返回。
//!
//! ## 依赖关系
//! - 被 `commands/vib.rs` 调用
//! - 使用 `models/parameters.rs` 的数据模型

use crate::harmonic::{AMU_KG, LIGHT};
use crate::models::{DisplayValues, ParameterInput, ResolvedParameters, Resolution};

use std::f64::consts::PI;

/// 由角频率和力常数计算折合质量
///
/// ω 单位 s⁻¹，k 单位 N/m，返回 g/mol。
pub fn calculate_mu(omega: f64, k: f64) -> f64 {
    k / omega.powi(2) / AMU_KG
}

/// 由角频率和折合质量计算力常数
///
/// ω 单位 s⁻¹，mu 单位 g/mol，返回 N/m。
pub fn calculate_k(omega: f64, mu: f64) -> f64 {
    mu * AMU_KG * omega.powi(2)
}

/// 按小数位取整（展示用）
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// 解析物理参数
///
/// 无论推导是否成功，展示值都会取整（波数、力常数 2 位，质量 4 位）。
/// 固定组合无效时 `resolved` 为 `None`。
pub fn resolve_parameters(input: &ParameterInput) -> Resolution {
    // 固定字段保持可编辑，推导字段锁定
    let lin_wn_editable = input.lin_wn_fixed;
    let ang_wn_editable = input.ang_wn_fixed;
    let force_constant_editable = input.force_constant_fixed;
    let reduced_mass_editable = input.reduced_mass_fixed;

    let mut lin_wn = input.lin_wn;
    let mut ang_wn = input.ang_wn;
    let mut fc = input.force_constant;
    let mut mu = input.reduced_mass;

    // 无效组合：固定个数 ≠ 2，或两个波数同时固定
    if input.fixed_count() != 2 || input.both_wavenumbers_fixed() {
        return Resolution {
            display: DisplayValues {
                lin_wn: round_to(lin_wn, 2),
                ang_wn: round_to(ang_wn, 2),
                force_constant: round_to(fc, 2),
                reduced_mass: round_to(mu, 4),
            },
            lin_wn_editable,
            ang_wn_editable,
            force_constant_editable,
            reduced_mass_editable,
            resolved: None,
        };
    }

    // 推导缺失参数
    if input.ang_wn_fixed && !input.lin_wn_fixed {
        let omega = ang_wn * LIGHT;
        lin_wn = ang_wn / (2.0 * PI);
        if input.force_constant_fixed && !input.reduced_mass_fixed {
            mu = calculate_mu(omega, fc);
        } else if !input.force_constant_fixed && input.reduced_mass_fixed {
            fc = calculate_k(omega, mu);
        }
    } else if input.lin_wn_fixed && !input.ang_wn_fixed {
        let omega = lin_wn * 2.0 * PI * LIGHT;
        ang_wn = lin_wn * 2.0 * PI;
        if input.force_constant_fixed && !input.reduced_mass_fixed {
            mu = calculate_mu(omega, fc);
        } else if !input.force_constant_fixed && input.reduced_mass_fixed {
            fc = calculate_k(omega, mu);
        }
    } else {
        // 两个波数均未固定：k 与 mu 固定
        ang_wn = (fc / (mu * AMU_KG)).sqrt() / LIGHT;
        lin_wn = ang_wn / (2.0 * PI);
    }

    Resolution {
        display: DisplayValues {
            lin_wn: round_to(lin_wn, 2),
            ang_wn: round_to(ang_wn, 2),
            force_constant: round_to(fc, 2),
            reduced_mass: round_to(mu, 4),
        },
        lin_wn_editable,
        ang_wn_editable,
        force_constant_editable,
        reduced_mass_editable,
        resolved: Some(ResolvedParameters {
            lin_wn,
            ang_wn,
            force_constant: fc,
            reduced_mass_kg: mu * AMU_KG,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_kf_mu(fc: f64, mu: f64) -> ParameterInput {
        ParameterInput {
            lin_wn: 0.0,
            ang_wn: 0.0,
            force_constant: fc,
            reduced_mass: mu,
            lin_wn_fixed: false,
            ang_wn_fixed: false,
            force_constant_fixed: true,
            reduced_mass_fixed: true,
        }
    }

    #[test]
    fn test_resolve_from_force_constant_and_mass() {
        // HCl-like: k = 480 N/m, mu = 0.9768 g/mol
        let res = resolve_parameters(&input_kf_mu(480.0, 0.9768));
        let params = res.resolved.expect("two fixed fields should resolve");

        assert!((res.display.ang_wn - 18145.84).abs() < 0.5);
        assert!((res.display.lin_wn - 2888.12).abs() < 0.5);
        assert!((params.reduced_mass_kg - 0.9768 * AMU_KG).abs() < 1e-32);
        assert_eq!(params.force_constant, 480.0);
    }

    #[test]
    fn test_round_trip_omega() {
        // 由 (ω, k) 推出 mu，再由 (ω, mu) 推回 k
        let omega = 5.44e14;
        let k = 480.0;
        let mu = calculate_mu(omega, k);
        let k_back = calculate_k(omega, mu);
        assert!((k_back - k).abs() / k < 1e-12);
    }

    #[test]
    fn test_resolve_ang_wn_and_mass() {
        let input = ParameterInput {
            lin_wn: 0.0,
            ang_wn: 18145.84,
            force_constant: 0.0,
            reduced_mass: 0.9768,
            lin_wn_fixed: false,
            ang_wn_fixed: true,
            force_constant_fixed: false,
            reduced_mass_fixed: true,
        };
        let res = resolve_parameters(&input);
        let params = res.resolved.unwrap();

        // 应重现 k ≈ 480 N/m
        assert!((params.force_constant - 480.0).abs() < 0.1);
        assert!((params.lin_wn - 18145.84 / (2.0 * PI)).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_lin_wn_and_force_constant() {
        let input = ParameterInput {
            lin_wn: 2888.12,
            ang_wn: 0.0,
            force_constant: 480.0,
            reduced_mass: 0.0,
            lin_wn_fixed: true,
            ang_wn_fixed: false,
            force_constant_fixed: true,
            reduced_mass_fixed: false,
        };
        let res = resolve_parameters(&input);
        let params = res.resolved.unwrap();

        assert!((params.ang_wn - 2888.12 * 2.0 * PI).abs() < 1e-9);
        assert!((res.display.reduced_mass - 0.9768).abs() < 1e-3);
    }

    #[test]
    fn test_three_fixed_is_invalid() {
        let mut input = input_kf_mu(480.0, 0.9768);
        input.lin_wn_fixed = true;
        input.lin_wn = 2888.0;

        let res = resolve_parameters(&input);
        assert!(res.resolved.is_none());
        // 展示值仍然取整返回
        assert_eq!(res.display.force_constant, 480.0);
        assert_eq!(res.display.reduced_mass, 0.9768);
    }

    #[test]
    fn test_both_wavenumbers_fixed_is_invalid() {
        let input = ParameterInput {
            lin_wn: 2888.0,
            ang_wn: 18145.84,
            force_constant: 0.0,
            reduced_mass: 0.0,
            lin_wn_fixed: true,
            ang_wn_fixed: true,
            force_constant_fixed: false,
            reduced_mass_fixed: false,
        };
        let res = resolve_parameters(&input);
        assert!(res.resolved.is_none());
    }

    #[test]
    fn test_display_rounding() {
        let res = resolve_parameters(&input_kf_mu(480.123456, 0.97684321));
        assert_eq!(res.display.force_constant, 480.12);
        assert_eq!(res.display.reduced_mass, 0.9768);
    }
}
