//! # orbital 子命令实现
//!
//! 类氢原子径向波函数计算与绘图。
//!
//! ## 依赖关系
//! - 使用 `cli/orbital.rs` 定义的 OrbitalArgs
//! - 使用 `orbital/` 模块进行计算、绘图与导出

use crate::cli::orbital::{OrbitalArgs, OrbitalOutputFormat, RadialPlotKind};
use crate::error::{Result, WaveplotError};
use crate::models::RadialKind;
use crate::orbital::{export, plot, RadialCalculator};
use crate::utils::output;

use std::path::Path;

/// 执行 orbital 命令
pub fn execute(args: OrbitalArgs) -> Result<()> {
    output::print_header("Hydrogenic Radial Wavefunction Calculation");

    let calculator = RadialCalculator::new(args.n, args.l, args.z)?;

    if args.points < 2 {
        return Err(WaveplotError::InvalidArgument(format!(
            "at least 2 grid points required (got {})",
            args.points
        )));
    }

    let r_max = args.r_max.unwrap_or_else(|| calculator.default_r_max());
    if r_max <= 0.0 {
        return Err(WaveplotError::InvalidArgument(format!(
            "r-max must be positive (got {})",
            r_max
        )));
    }

    let kind = match args.kind {
        RadialPlotKind::Wavefunction => RadialKind::Wavefunction,
        RadialPlotKind::Rdf => RadialKind::DistributionFunction,
    };

    output::print_info(&format!(
        "n = {}, l = {}, Z = {}, grid: {} points over [0, {:.2}] a₀",
        args.n, args.l, args.z, args.points, r_max
    ));

    let dataset = calculator.calculate(kind, r_max, args.points);

    let title = args.title.clone().unwrap_or_else(|| {
        format!("Radial wavefunction n = {}, l = {} (Z = {})", args.n, args.l, args.z)
    });

    let format = args.format.unwrap_or_else(|| guess_format(&args.output));

    match format {
        OrbitalOutputFormat::Png | OrbitalOutputFormat::Svg => {
            plot::render_radial_plot(
                &dataset,
                &args.output,
                &title,
                args.width,
                args.height,
                format == OrbitalOutputFormat::Svg,
            )?;
            output::print_success(&format!("Plot saved to '{}'", args.output.display()));
        }
        OrbitalOutputFormat::Dat => {
            export::write_dat(Some(&dataset), &args.output)?;
            output::print_success(&format!("Data saved to '{}'", args.output.display()));
        }
    }

    if let Some(ref data_out) = args.data_out {
        export::write_dat(Some(&dataset), data_out)?;
        output::print_success(&format!("Data saved to '{}'", data_out.display()));
    }

    Ok(())
}

/// 从文件扩展名推断输出格式
fn guess_format(path: &Path) -> OrbitalOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OrbitalOutputFormat::Svg,
        Some("dat") | Some("txt") => OrbitalOutputFormat::Dat,
        _ => OrbitalOutputFormat::Png,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format(Path::new("radial.svg")),
            OrbitalOutputFormat::Svg
        );
        assert_eq!(
            guess_format(Path::new("radial.dat")),
            OrbitalOutputFormat::Dat
        );
        assert_eq!(
            guess_format(Path::new("radial.png")),
            OrbitalOutputFormat::Png
        );
    }
}
