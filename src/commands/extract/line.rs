//! # line 子命令实现
//!
//! 提取两个分数坐标点之间的直线剖面。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的 LineArgs
//! - 使用 `density/profile.rs` 计算剖面

use crate::cli::extract::{parse_vector, LineArgs};
use crate::commands::extract::{default_title, guess_format_from_extension, load_grid, write_profile};
use crate::density;
use crate::error::{DenutilError, Result};
use crate::utils::output;

/// 执行直线剖面提取
pub fn execute(args: LineArgs) -> Result<()> {
    output::print_header("Line Profile Extraction");

    let from = parse_vector(&args.from).map_err(DenutilError::InvalidVector)?;
    let to = parse_vector(&args.to).map_err(DenutilError::InvalidVector)?;

    let (grid, lattice) = load_grid(&args.input)?;

    output::print_info(&format!(
        "Sampling {} points from ({:.4}, {:.4}, {:.4}) to ({:.4}, {:.4}, {:.4})",
        args.samples, from[0], from[1], from[2], to[0], to[1], to[2]
    ));

    let profile = density::line_profile(&grid, &lattice, from, to, args.samples, !args.raw)?;

    let (v_min, v_max) = profile.value_range();
    output::print_info(&format!("Profile range: {:.6e} .. {:.6e}", v_min, v_max));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));
    let title = args.title.clone().unwrap_or_else(|| default_title(&args.input));

    write_profile(&profile, format, &args.output, &title, args.width, args.height)
}
