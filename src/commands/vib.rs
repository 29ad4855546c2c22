//! # vib 子命令实现
//!
//! 谐振子振动波函数计算：参数解析 → 能级与波函数计算 → 绘图 / 导出。
//! 同步的函数流水线，每一步都是纯计算。
//!
//! ## 功能
//! - 单次计算：命令行固定两个参数，推导其余参数
//! - 批量模式：CSV 清单逐行计算（rayon 并行），每行输出图像与数据文件
//! - 终端参数表与能级表（tabled）
//!
//! ## 依赖关系
//! - 使用 `cli/vib.rs` 定义的 VibArgs
//! - 使用 `harmonic/` 模块进行计算、绘图与导出
//! - 使用 `batch/` 模块进行批量处理

use crate::batch::{BatchRunner, ProcessResult};
use crate::cli::vib::{VibArgs, VibOutputFormat};
use crate::error::{Result, WaveplotError};
use crate::harmonic::oscillator::calculate_dataset;
use crate::harmonic::plot::{assemble_plot, render_plot, PlotStyle};
use crate::harmonic::export;
use crate::harmonic::resolver::resolve_parameters;
use crate::models::{HarmonicDataset, ParameterInput, Resolution, VibJob};
use crate::utils::output;

use std::fs;
use std::path::Path;

// 未固定字段的占位数值（HCl 量级的典型值）
const DEFAULT_LIN_WN: f64 = 2888.0;
const DEFAULT_ANG_WN: f64 = 18145.84;
const DEFAULT_FORCE_CONSTANT: f64 = 480.0;
const DEFAULT_REDUCED_MASS: f64 = 0.9768;

/// 执行 vib 命令
pub fn execute(args: VibArgs) -> Result<()> {
    output::print_header("Harmonic Oscillator Wavefunction Calculation");

    match args.jobs_file.clone() {
        Some(jobs_file) => execute_batch(&jobs_file, &args),
        None => execute_single(&args),
    }
}

/// 单次计算模式
fn execute_single(args: &VibArgs) -> Result<()> {
    let input = parameter_input(args);
    let resolution = resolve_parameters(&input);

    // 展示值无论解析成功与否都已取整，先打印再决定是否继续
    print_parameter_table(&resolution);

    let dataset = match calculate_dataset(&resolution, args.max_n) {
        Some(d) => d,
        None => return Err(unresolved_error(&input)),
    };

    print_state_table(&dataset);

    let format = args.format.unwrap_or_else(|| guess_format(&args.output));

    match format {
        VibOutputFormat::Png | VibOutputFormat::Svg => {
            if args.no_plot {
                output::print_info("Plot generation skipped (--no-plot)");
            } else {
                let style = plot_style(args);
                let model = assemble_plot(&dataset, &style);
                render_plot(
                    &model,
                    &args.output,
                    &args.title,
                    args.width,
                    args.height,
                    format == VibOutputFormat::Svg,
                )?;
                output::print_success(&format!("Plot saved to '{}'", args.output.display()));
            }
        }
        VibOutputFormat::Dat => {
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

/// 批量处理模式
fn execute_batch(jobs_file: &Path, args: &VibArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: manifest '{}'", jobs_file.display()));

    let manifest = fs::read_to_string(jobs_file).map_err(|e| WaveplotError::FileReadError {
        path: jobs_file.display().to_string(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(manifest.as_bytes());
    let jobs: Vec<VibJob> = reader
        .deserialize()
        .collect::<std::result::Result<_, csv::Error>>()?;

    if jobs.is_empty() {
        output::print_warning("Manifest contains no jobs");
        return Ok(());
    }

    output::print_info(&format!("Found {} jobs", jobs.len()));

    // 确保输出目录存在
    fs::create_dir_all(&args.output_dir).map_err(|e| WaveplotError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(jobs, |job| process_job(job, args));

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed jobs:");
        for (name, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", name, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个作业：输出 <name>_harmonic.png 与 <name>_harmonic.dat
fn process_job(job: &VibJob, args: &VibArgs) -> ProcessResult {
    if job.max_n > 25 {
        return ProcessResult::Failed(
            job.name.clone(),
            format!("max_n must be 0-25 (got {})", job.max_n),
        );
    }

    let plot_path = args.output_dir.join(format!("{}_harmonic.png", job.name));
    let dat_path = args.output_dir.join(format!("{}_harmonic.dat", job.name));

    if (plot_path.exists() || dat_path.exists()) && !args.overwrite {
        return ProcessResult::Skipped(format!("Output exists, skipping: {}", job.name));
    }

    let resolution = resolve_parameters(&ParameterInput {
        lin_wn: 0.0,
        ang_wn: 0.0,
        force_constant: job.force_constant,
        reduced_mass: job.reduced_mass,
        lin_wn_fixed: false,
        ang_wn_fixed: false,
        force_constant_fixed: true,
        reduced_mass_fixed: true,
    });

    let dataset = match calculate_dataset(&resolution, job.max_n) {
        Some(d) => d,
        None => {
            return ProcessResult::Failed(job.name.clone(), "parameters unresolved".to_string())
        }
    };

    let style = plot_style(args);
    let model = assemble_plot(&dataset, &style);
    if let Err(e) = render_plot(&model, &plot_path, &job.name, args.width, args.height, false) {
        return ProcessResult::Failed(job.name.clone(), e.to_string());
    }
    if let Err(e) = export::write_dat(Some(&dataset), &dat_path) {
        return ProcessResult::Failed(job.name.clone(), e.to_string());
    }

    ProcessResult::Success(format!("{} -> {}", job.name, plot_path.display()))
}

/// 由命令行参数构造解析器输入（给出即固定）
fn parameter_input(args: &VibArgs) -> ParameterInput {
    ParameterInput {
        lin_wn: args.lin_wn.unwrap_or(DEFAULT_LIN_WN),
        ang_wn: args.ang_wn.unwrap_or(DEFAULT_ANG_WN),
        force_constant: args.force_constant.unwrap_or(DEFAULT_FORCE_CONSTANT),
        reduced_mass: args.reduced_mass.unwrap_or(DEFAULT_REDUCED_MASS),
        lin_wn_fixed: args.lin_wn.is_some(),
        ang_wn_fixed: args.ang_wn.is_some(),
        force_constant_fixed: args.force_constant.is_some(),
        reduced_mass_fixed: args.reduced_mass.is_some(),
    }
}

/// 无效固定组合的错误描述
fn unresolved_error(input: &ParameterInput) -> WaveplotError {
    let reason = if input.both_wavenumbers_fixed() {
        "both wavenumbers are fixed".to_string()
    } else {
        format!("{} parameter(s) fixed", input.fixed_count())
    };
    WaveplotError::UnresolvedParameters { reason }
}

/// 从文件扩展名推断输出格式
fn guess_format(path: &Path) -> VibOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => VibOutputFormat::Svg,
        Some("dat") | Some("txt") => VibOutputFormat::Dat,
        _ => VibOutputFormat::Png,
    }
}

/// 由命令行参数构造绘图样式
fn plot_style(args: &VibArgs) -> PlotStyle {
    PlotStyle {
        wf_scale: args.wf_scale,
        show_potential: !args.hide_potential,
        show_states: !args.hide_states,
        show_wavefunctions: !args.hide_wavefunctions,
        ..PlotStyle::default()
    }
}

/// 打印参数表格
fn print_parameter_table(resolution: &Resolution) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ParameterRow {
        #[tabled(rename = "Parameter")]
        name: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let d = &resolution.display;
    let source = |fixed: bool| {
        if fixed {
            "fixed".to_string()
        } else {
            "derived".to_string()
        }
    };

    let rows = vec![
        ParameterRow {
            name: "v (cm⁻¹)".to_string(),
            value: format!("{:.2}", d.lin_wn),
            source: source(resolution.lin_wn_editable),
        },
        ParameterRow {
            name: "w (cm⁻¹)".to_string(),
            value: format!("{:.2}", d.ang_wn),
            source: source(resolution.ang_wn_editable),
        },
        ParameterRow {
            name: "k (N/m)".to_string(),
            value: format!("{:.2}", d.force_constant),
            source: source(resolution.force_constant_editable),
        },
        ParameterRow {
            name: "mu (g/mol)".to_string(),
            value: format!("{:.4}", d.reduced_mass),
            source: source(resolution.reduced_mass_editable),
        },
    ];

    output::print_header("Resolved Parameters");
    println!("{}", Table::new(&rows));
}

/// 打印能级表格
fn print_state_table(dataset: &HarmonicDataset) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct StateRow {
        #[tabled(rename = "n")]
        n: usize,
        #[tabled(rename = "E (cm⁻¹)")]
        energy: String,
    }

    let rows: Vec<StateRow> = dataset
        .state_energies
        .iter()
        .enumerate()
        .map(|(n, &e)| StateRow {
            n,
            energy: format!("{:.2}", e),
        })
        .collect();

    output::print_header(&format!("Harmonic States (n = 0..={})", dataset.max_n()));
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base_args() -> VibArgs {
        VibArgs {
            lin_wn: None,
            ang_wn: None,
            force_constant: Some(480.0),
            reduced_mass: Some(0.9768),
            max_n: 5,
            output: PathBuf::from("waveplot_harmonic.png"),
            format: None,
            data_out: None,
            no_plot: true,
            wf_scale: 0.01,
            hide_potential: false,
            hide_states: false,
            hide_wavefunctions: false,
            width: 1200,
            height: 800,
            title: "Harmonic oscillator".to_string(),
            jobs_file: None,
            output_dir: PathBuf::from("waveplot_batch"),
            jobs: 0,
            overwrite: false,
        }
    }

    #[test]
    fn test_parameter_input_marks_provided_as_fixed() {
        let input = parameter_input(&base_args());
        assert!(!input.lin_wn_fixed);
        assert!(!input.ang_wn_fixed);
        assert!(input.force_constant_fixed);
        assert!(input.reduced_mass_fixed);
        assert_eq!(input.fixed_count(), 2);
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format(Path::new("out.svg")),
            VibOutputFormat::Svg
        );
        assert_eq!(
            guess_format(Path::new("out.dat")),
            VibOutputFormat::Dat
        );
        assert_eq!(
            guess_format(Path::new("out.png")),
            VibOutputFormat::Png
        );
        assert_eq!(guess_format(Path::new("out")), VibOutputFormat::Png);
    }

    #[test]
    fn test_single_fixed_is_unresolved() {
        let mut args = base_args();
        args.reduced_mass = None;
        let input = parameter_input(&args);
        let resolution = resolve_parameters(&input);
        assert!(!resolution.is_resolved());

        let err = unresolved_error(&input);
        assert!(err.to_string().contains("1 parameter(s) fixed"));
    }
}
