//! # radial 子命令实现
//!
//! 围绕中心点做球面平均。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的 RadialArgs
//! - 使用 `density/profile.rs` 计算剖面

use crate::cli::extract::{parse_vector, RadialArgs};
use crate::commands::extract::{default_title, guess_format_from_extension, load_grid, write_profile};
use crate::density;
use crate::error::{DenutilError, Result};
use crate::utils::output;

/// 执行球面平均提取
pub fn execute(args: RadialArgs) -> Result<()> {
    output::print_header("Spherical Average Extraction");

    let center = parse_vector(&args.center).map_err(DenutilError::InvalidVector)?;

    let (grid, lattice) = load_grid(&args.input)?;

    // 默认半径为最短晶格向量的一半，保证球留在晶胞内
    let rmax = args.rmax.unwrap_or_else(|| lattice.min_vector_length() / 2.0);

    output::print_info(&format!(
        "Averaging around ({:.4}, {:.4}, {:.4}) up to r = {:.4} A in {} bins",
        center[0], center[1], center[2], rmax, args.bins
    ));

    let profile = density::spherical_average(&grid, &lattice, center, rmax, args.bins, !args.raw)?;

    let (v_min, v_max) = profile.value_range();
    output::print_info(&format!("Profile range: {:.6e} .. {:.6e}", v_min, v_max));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let title = args.title.clone().unwrap_or_else(|| default_title(&args.input));

    write_profile(&profile, format, &args.output, &title, args.width, args.height)
}
