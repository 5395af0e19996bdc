//! # zavg 子命令实现
//!
//! 沿晶格轴做平面平均。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的 ZavgArgs
//! - 使用 `density/profile.rs` 计算剖面

use crate::cli::extract::ZavgArgs;
use crate::commands::extract::{default_title, guess_format_from_extension, load_grid, write_profile};
use crate::density;
use crate::error::Result;
use crate::models::Axis;
use crate::utils::output;

/// 执行轴向平均提取
pub fn execute(args: ZavgArgs) -> Result<()> {
    output::print_header("Planar Average Extraction");

    let (grid, lattice) = load_grid(&args.input)?;

    let axis: Axis = args.axis.into();
    output::print_info(&format!(
        "Averaging over planes perpendicular to the {} axis ({} slices)",
        axis,
        grid.shape[axis.index()]
    ));

    let profile = density::axis_average(&grid, &lattice, axis, !args.raw);

    let (v_min, v_max) = profile.value_range();
    output::print_info(&format!("Profile range: {:.6e} .. {:.6e}", v_min, v_max));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let title = args.title.clone().unwrap_or_else(|| default_title(&args.input));

    write_profile(&profile, format, &args.output, &title, args.width, args.height)
}
