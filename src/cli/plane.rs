//! # plane 子命令 CLI 定义
//!
//! 把二进制平面切割文件渲染为热图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plane.rs`

use clap::Args;
use std::path::PathBuf;

/// plane 子命令参数
#[derive(Args, Debug)]
pub struct PlaneArgs {
    /// Input binary plane-cut file
    pub input: PathBuf,

    /// Output image path (PNG, or SVG by extension)
    #[arg(short, long, default_value = "planedata.png")]
    pub output: PathBuf,

    /// Map values linearly instead of on a logarithmic scale
    #[arg(long, default_value_t = false)]
    pub linear: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file name)
    #[arg(long)]
    pub title: Option<String>,
}
