//! # info 命令实现
//!
//! 打印体数据文件的汇总统计。
//!
//! ## 功能
//! - 单文件：统计表格、可解析时的晶格参数、可选中心切片求和
//! - 目录：批量并行处理，逐文件单行摘要 + 失败汇总
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的 InfoArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/chgcar.rs` 和 `density/stats.rs`

use crate::batch::{self, ProcessResult};
use crate::cli::info::InfoArgs;
use crate::density::GridStats;
use crate::error::{DenutilError, Result};
use crate::models::{Axis, Lattice};
use crate::parsers;
use crate::utils::{output, progress};

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header("Volumetric Density File Info");

    if args.input.is_file() {
        execute_single_file(&args)
    } else if args.input.is_dir() {
        execute_batch(&args)
    } else {
        Err(DenutilError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &InfoArgs) -> Result<()> {
    let pb = progress::create_spinner(&format!("Reading '{}'", args.input.display()));
    let parsed = parsers::parse_density_file(&args.input);
    pb.finish_and_clear();

    let grid = parsed?;
    let stats = GridStats::compute(&grid);

    output::print_success(&format!(
        "Loaded grid: {} x {} x {} ({} points, {} atoms)",
        stats.shape[0], stats.shape[1], stats.shape[2], stats.points, stats.atom_count
    ));

    print_stats_table(&stats);

    // 头部可解析时附带晶格信息
    match Lattice::from_header(&grid.metadata, &args.input.display().to_string()) {
        Ok(lattice) => print_lattice(&lattice),
        Err(_) => {
            output::print_warning("Header does not contain a parsable lattice block");
        }
    }

    if let Some(axis_arg) = args.center_slice {
        let axis: Axis = axis_arg.into();
        output::print_info(&format!(
            "Sum of center slice along {}: {:.6}",
            axis,
            grid.center_slice_sum(axis)
        ));
    }

    Ok(())
}

/// 批量处理模式
fn execute_batch(args: &InfoArgs) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = batch::collect_files(&args.input, &args.pattern, args.recursive);

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} density files", files.len()));

    let result = batch::run_parallel(files, args.jobs, process_batch_file);

    for line in &result.summaries {
        output::print_success(line);
    }

    output::print_separator();
    output::print_done(&format!(
        "Batch complete: {} success, {} failed",
        result.success, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &PathBuf) -> ProcessResult {
    match parsers::parse_density_file(input) {
        Ok(grid) => {
            let stats = GridStats::compute(&grid);
            ProcessResult::Success(format!(
                "{}: {}x{}x{}  min {:.4e}  max {:.4e}  sum {:.4e}",
                input.display(),
                stats.shape[0],
                stats.shape[1],
                stats.shape[2],
                stats.min,
                stats.max,
                stats.sum
            ))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 打印统计表格
fn print_stats_table(stats: &GridStats) {
    #[derive(Tabled)]
    struct StatRow {
        #[tabled(rename = "Property")]
        property: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        StatRow {
            property: "Grid points".to_string(),
            value: stats.points.to_string(),
        },
        StatRow {
            property: "Atoms".to_string(),
            value: stats.atom_count.to_string(),
        },
        StatRow {
            property: "Min".to_string(),
            value: format!("{:.6e}", stats.min),
        },
        StatRow {
            property: "Max".to_string(),
            value: format!("{:.6e}", stats.max),
        },
        StatRow {
            property: "Sum".to_string(),
            value: format!("{:.6e}", stats.sum),
        },
        StatRow {
            property: "Mean".to_string(),
            value: format!("{:.6e}", stats.mean),
        },
    ];

    let table = Table::new(&rows);
    println!("{}", table);
}

/// 打印晶格参数摘要
fn print_lattice(lattice: &Lattice) {
    let (a, b, c, alpha, beta, gamma) = lattice.parameters();
    output::print_info(&format!(
        "Lattice: a = {:.4} A, b = {:.4} A, c = {:.4} A",
        a, b, c
    ));
    output::print_info(&format!(
        "Angles:  alpha = {:.2}, beta = {:.2}, gamma = {:.2}",
        alpha, beta, gamma
    ));
    output::print_info(&format!("Volume:  {:.4} A^3", lattice.volume().abs()));
}
