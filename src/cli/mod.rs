//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `info`: 打印体数据文件的汇总统计（支持目录批量模式）
//! - `extract`: 剖面提取（嵌套子命令）
//!   - `line`: 两点之间的直线剖面
//!   - `zavg`: 轴向平面平均
//!   - `radial`: 球面平均
//! - `plane`: 渲染二进制平面切割热图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: info, extract, plane

pub mod extract;
pub mod info;
pub mod plane;

use clap::{Parser, Subcommand};

/// Denutil - 电子密度后处理统一工具箱
#[derive(Parser)]
#[command(name = "denutil")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A unified electron density post-processing toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Print summary statistics of volumetric density files (CHGCAR/LOCPOT/PARCHG)
    Info(info::InfoArgs),

    /// Extract 1D profiles from a volumetric density file
    Extract(extract::ExtractArgs),

    /// Render a binary plane-cut file as a heatmap image
    Plane(plane::PlaneArgs),
}
