//! # 径向波函数图表渲染
//!
//! 使用 `plotters` 渲染径向波函数或径向分布函数曲线。
//!
//! ## 依赖关系
//! - 被 `commands/orbital.rs` 调用
//! - 使用 `models/dataset.rs` 的 RadialDataset
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, WaveplotError};
use crate::models::{RadialDataset, RadialKind};

use plotters::prelude::*;
use std::path::Path;

/// 渲染径向函数图到文件
pub fn render_radial_plot(
    dataset: &RadialDataset,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, dataset, title)?;
        root.present()
            .map_err(|e| WaveplotError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_chart(&root, dataset, title)?;
        root.present()
            .map_err(|e| WaveplotError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    dataset: &RadialDataset,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    let x_max = dataset.r.last().copied().unwrap_or(1.0);
    let y_min = dataset.values.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = dataset
        .values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let margin = 0.05 * (y_max - y_min).max(f64::MIN_POSITIVE);

    let y_desc = match dataset.kind {
        RadialKind::Wavefunction => "R(r)",
        RadialKind::DistributionFunction => "r²R(r)²",
    };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, (y_min - margin)..(y_max + margin))
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("r (a₀)")
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            dataset.r.iter().cloned().zip(dataset.values.iter().cloned()),
            line_color.stroke_width(2),
        ))
        .map_err(|e| WaveplotError::Other(format!("{:?}", e)))?;

    Ok(())
}
