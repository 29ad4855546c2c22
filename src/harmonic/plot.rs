//! # 谐振子图表装配与渲染
//!
//! 先将数据集装配为不可变的绘图模型（迹线 + 坐标范围），再用 `plotters`
//! 渲染。样式是显式传入的配置值，渲染层每次消费一个全新的模型，
//! 不做原地修补。
//!
//! ## 迹线
//! - 谐振势曲线
//! - 每个量子态一条水平能级线（跨越网格位移范围）
//! - 每个波函数按固定因子缩放后叠加在对应能级上
//!
//! ## 依赖关系
//! - 被 `commands/vib.rs` 调用
//! - 使用 `models/dataset.rs` 的 HarmonicDataset
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, WaveplotError};
use crate::harmonic::ANGSTROM_PER_M;
use crate::models::HarmonicDataset;

use plotters::prelude::*;
use std::path::Path;

/// 波函数迹线默认配色（依次循环使用）
const WF_PALETTE: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

/// 绘图样式配置
///
/// 进程启动时构造一次，显式传入装配器。
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// 波函数纵向缩放因子
    pub wf_scale: f64,
    /// 谐振势曲线颜色
    pub potential_color: (u8, u8, u8),
    /// 能级线颜色
    pub state_color: (u8, u8, u8),
    /// 线宽（像素）
    pub line_width: u32,
    /// 是否绘制谐振势
    pub show_potential: bool,
    /// 是否绘制能级线
    pub show_states: bool,
    /// 是否绘制波函数
    pub show_wavefunctions: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            wf_scale: 0.01,
            potential_color: (0, 102, 204),
            state_color: (0, 0, 0),
            line_width: 2,
            show_potential: true,
            show_states: true,
            show_wavefunctions: true,
        }
    }
}

/// 单条迹线
#[derive(Debug, Clone)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: (u8, u8, u8),
    pub line_width: u32,
}

/// 不可变绘图模型
#[derive(Debug, Clone)]
pub struct PlotModel {
    pub traces: Vec<Trace>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// 将数据集装配为绘图模型
///
/// 位移在此处一次性转换为 Å。纵轴范围取基态下方半个能级间距、
/// 最高态上方一个能级间距；仅有基态时以 2·E_0（恰为 hν）作为间距回退。
pub fn assemble_plot(dataset: &HarmonicDataset, style: &PlotStyle) -> PlotModel {
    let x_ang: Vec<f64> = dataset.x.iter().map(|&x| x * ANGSTROM_PER_M).collect();

    let x_min = x_ang.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = x_ang.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut traces = Vec::new();

    if style.show_potential {
        traces.push(Trace {
            x: x_ang.clone(),
            y: dataset.potential.clone(),
            color: style.potential_color,
            line_width: style.line_width,
        });
    }

    if style.show_states {
        for &energy in &dataset.state_energies {
            traces.push(Trace {
                x: vec![x_min, x_max],
                y: vec![energy, energy],
                color: style.state_color,
                line_width: style.line_width,
            });
        }
    }

    if style.show_wavefunctions {
        for (n, (wf, &energy)) in dataset
            .wavefunctions
            .iter()
            .zip(dataset.state_energies.iter())
            .enumerate()
        {
            traces.push(Trace {
                x: x_ang.clone(),
                y: wf.iter().map(|&v| v * style.wf_scale + energy).collect(),
                color: WF_PALETTE[n % WF_PALETTE.len()],
                line_width: style.line_width,
            });
        }
    }

    let e = &dataset.state_energies;
    let spacing = if e.len() >= 2 {
        e[e.len() - 1] - e[e.len() - 2]
    } else {
        // 单一态时无相邻间距可取；2·E_0 = hν 恰为谐振子能级间距
        2.0 * e[0]
    };
    let lower = e[0] - spacing / 2.0;
    let upper = e[e.len() - 1] + spacing;

    PlotModel {
        traces,
        x_range: (x_min, x_max),
        y_range: (lower, upper),
    }
}

/// 渲染绘图模型到文件
pub fn render_plot(
    model: &PlotModel,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, model, title)?;
        root.present()
            .map_err(|e| WaveplotError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, model, title)?;
        root.present()
            .map_err(|e| WaveplotError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    model: &PlotModel,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            model.x_range.0..model.x_range.1,
            model.y_range.0..model.y_range.1,
        )
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("x (Å)")
        .y_desc("Energy (cm⁻¹)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    for trace in &model.traces {
        let (r, g, b) = trace.color;
        let color = RGBColor(r, g, b);
        chart
            .draw_series(LineSeries::new(
                trace.x.iter().cloned().zip(trace.y.iter().cloned()),
                color.stroke_width(trace.line_width),
            ))
            .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonic::oscillator::calculate_dataset;
    use crate::harmonic::resolver::resolve_parameters;
    use crate::models::ParameterInput;

    fn dataset(max_n: u32) -> HarmonicDataset {
        let resolution = resolve_parameters(&ParameterInput {
            lin_wn: 0.0,
            ang_wn: 0.0,
            force_constant: 480.0,
            reduced_mass: 0.9768,
            lin_wn_fixed: false,
            ang_wn_fixed: false,
            force_constant_fixed: true,
            reduced_mass_fixed: true,
        });
        calculate_dataset(&resolution, max_n).unwrap()
    }

    #[test]
    fn test_trace_count() {
        let ds = dataset(5);
        let model = assemble_plot(&ds, &PlotStyle::default());
        // 1 条势曲线 + 6 条能级线 + 6 条波函数
        assert_eq!(model.traces.len(), 13);
    }

    #[test]
    fn test_y_range_formula() {
        let ds = dataset(5);
        let model = assemble_plot(&ds, &PlotStyle::default());

        let e = &ds.state_energies;
        let spacing = e[5] - e[4];
        assert!((model.y_range.0 - (e[0] - spacing / 2.0)).abs() < 1e-9);
        assert!((model.y_range.1 - (2.0 * e[5] - e[4])).abs() < 1e-9);
    }

    #[test]
    fn test_y_range_single_state() {
        // max_n = 0 回退：间距取 2·E_0，下界恰为 0
        let ds = dataset(0);
        let model = assemble_plot(&ds, &PlotStyle::default());

        let e0 = ds.state_energies[0];
        assert!(model.y_range.0.abs() < 1e-9 * e0);
        assert!((model.y_range.1 - 3.0 * e0).abs() < 1e-9 * e0);
    }

    #[test]
    fn test_wavefunction_offset_by_energy() {
        let ds = dataset(2);
        let style = PlotStyle::default();
        let model = assemble_plot(&ds, &style);

        // 最后一条迹线是 n = 2 的波函数
        let wf_trace = model.traces.last().unwrap();
        let expected = ds.wavefunctions[2][0] * style.wf_scale + ds.state_energies[2];
        assert!((wf_trace.y[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_toggles_reduce_traces() {
        let ds = dataset(3);
        let style = PlotStyle {
            show_potential: false,
            show_states: false,
            ..PlotStyle::default()
        };
        let model = assemble_plot(&ds, &style);
        assert_eq!(model.traces.len(), 4);
    }

    #[test]
    fn test_x_range_in_angstrom() {
        let ds = dataset(5);
        let model = assemble_plot(&ds, &PlotStyle::default());
        let expected = ds.x[0] * ANGSTROM_PER_M;
        assert!((model.x_range.0 - expected).abs() < 1e-12);
    }
}
