//! # plane 命令实现
//!
//! 把二进制平面切割文件渲染为热图。
//!
//! ## 功能
//! - 打印平面尺寸和取值范围
//! - 默认对数色标（非正值先做下限截断），可选线性色标
//!
//! ## 依赖关系
//! - 使用 `cli/plane.rs` 定义的 PlaneArgs
//! - 使用 `parsers/planebin.rs` 和 `density/plot.rs`

use crate::cli::plane::PlaneArgs;
use crate::density::plot;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

use std::path::Path;

/// 执行 plane 命令
pub fn execute(args: PlaneArgs) -> Result<()> {
    output::print_header("Plane-Cut Heatmap");

    output::print_info(&format!("Reading '{}'", args.input.display()));
    let plane = parsers::parse_plane_file(&args.input)?;

    output::print_info(&format!("Plane dimensions: {} x {}", plane.nx, plane.ny));
    output::print_info(&format!(
        "Value range: {:.6e} .. {:.6e}",
        plane.min(),
        plane.max()
    ));

    let title = args.title.clone().unwrap_or_else(|| {
        args.input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("plane")
            .to_string()
    });

    let use_svg = is_svg(&args.output);

    if args.linear {
        plot::generate_plane_heatmap(
            &plane,
            &args.output,
            &title,
            args.width,
            args.height,
            false,
            use_svg,
        )?;
    } else {
        // 对数色标要求严格正值
        let clamped = plane.clamp_for_log();
        plot::generate_plane_heatmap(
            &clamped,
            &args.output,
            &title,
            args.width,
            args.height,
            true,
            use_svg,
        )?;
    }

    output::print_success(&format!("Heatmap saved to '{}'", args.output.display()));
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}
