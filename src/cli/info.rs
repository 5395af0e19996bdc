//! # info 子命令 CLI 定义
//!
//! 打印体数据文件的汇总统计。输入为目录时进入批量模式。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use clap::Args;
use std::path::PathBuf;

use crate::batch::DEFAULT_PATTERNS;
use crate::cli::extract::AxisArg;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Input: volumetric density file or directory containing such files
    pub input: PathBuf,

    /// Additionally print the sum over the center slice along this axis
    #[arg(long, value_enum)]
    pub center_slice: Option<AxisArg>,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode)
    #[arg(long, default_value = DEFAULT_PATTERNS)]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}
