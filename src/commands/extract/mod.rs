//! # extract 命令实现
//!
//! 剖面提取统一入口，包含多个子命令：
//! - `line`: 直线剖面
//! - `zavg`: 轴向平面平均
//! - `radial`: 球面平均
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 子模块: line, zavg, radial

pub mod line;
pub mod radial;
pub mod zavg;

use crate::cli::extract::{ExtractArgs, ExtractCommands, ProfileOutputFormat};
use crate::density::{export, plot, Profile};
use crate::error::Result;
use crate::models::{DensityGrid, Lattice};
use crate::parsers;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    match args.command {
        ExtractCommands::Line(line_args) => line::execute(line_args),
        ExtractCommands::Zavg(zavg_args) => zavg::execute(zavg_args),
        ExtractCommands::Radial(radial_args) => radial::execute(radial_args),
    }
}

/// 读取体数据文件并解析头部晶格
///
/// 剖面提取需要实空间坐标，头部必须包含可解析的晶格块。
pub(crate) fn load_grid(input: &Path) -> Result<(DensityGrid, Lattice)> {
    let pb = progress::create_spinner(&format!("Reading '{}'", input.display()));
    let parsed = parsers::parse_density_file(input);
    pb.finish_and_clear();

    let grid = parsed?;
    let lattice = Lattice::from_header(&grid.metadata, &input.display().to_string())?;

    output::print_success(&format!(
        "Loaded grid: {} x {} x {} ({} atoms)",
        grid.shape[0],
        grid.shape[1],
        grid.shape[2],
        grid.atom_count()
    ));

    Ok((grid, lattice))
}

/// 从文件扩展名推断输出格式
pub(crate) fn guess_format_from_extension(path: &Path) -> ProfileOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => ProfileOutputFormat::Svg,
        Some("csv") => ProfileOutputFormat::Csv,
        Some("dat") | Some("txt") => ProfileOutputFormat::Dat,
        _ => ProfileOutputFormat::Png,
    }
}

/// 按输出格式写出剖面
pub(crate) fn write_profile(
    profile: &Profile,
    format: ProfileOutputFormat,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    match format {
        ProfileOutputFormat::Png | ProfileOutputFormat::Svg => plot::generate_profile_plot(
            profile,
            output_path,
            title,
            width,
            height,
            format == ProfileOutputFormat::Svg,
        ),
        ProfileOutputFormat::Csv => export::to_csv(profile, output_path),
        ProfileOutputFormat::Dat => export::to_dat(profile, title, output_path),
    }?;

    output::print_success(&format!("Profile saved to '{}'", output_path.display()));
    Ok(())
}

/// 默认图表标题：输入文件名
pub(crate) fn default_title(input: &Path) -> String {
    input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("density")
        .to_string()
}
