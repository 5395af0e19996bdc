//! # extract 子命令 CLI 定义
//!
//! 剖面提取统一入口，包含多个子命令：
//! - `line`: 两个分数坐标点之间的直线剖面
//! - `zavg`: 沿晶格轴的平面平均
//! - `radial`: 围绕中心点的球面平均
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract/` 相应模块

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::Axis;

// ─────────────────────────────────────────────────────────────
// Extract 主命令
// ─────────────────────────────────────────────────────────────

/// extract 主命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    #[command(subcommand)]
    pub command: ExtractCommands,
}

/// extract 子命令
#[derive(Subcommand, Debug)]
pub enum ExtractCommands {
    /// Line profile between two fractional coordinates
    Line(LineArgs),

    /// Planar average along a lattice axis
    Zavg(ZavgArgs),

    /// Spherical average around a center point
    Radial(RadialArgs),
}

// ─────────────────────────────────────────────────────────────
// 公共类型
// ─────────────────────────────────────────────────────────────

/// 网格轴参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum AxisArg {
    /// First declared grid dimension
    X,
    /// Second declared grid dimension
    Y,
    /// Third declared grid dimension
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Axis {
        match arg {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

/// 剖面输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProfileOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file
    Csv,
    /// Whitespace-separated data file (numpy loadtxt compatible)
    Dat,
}

/// 解析 "x,y,z" 形式的分数坐标向量
pub fn parse_vector(input: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "Invalid vector '{}'. Use three comma-separated numbers, e.g. 0.5,0.5,0.5",
            input
        ));
    }

    let mut vector = [0.0; 3];
    for (i, part) in parts.iter().enumerate() {
        vector[i] = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid vector component '{}' in '{}'", part, input))?;
    }

    Ok(vector)
}

// ─────────────────────────────────────────────────────────────
// line 子命令
// ─────────────────────────────────────────────────────────────

/// 直线剖面参数
#[derive(Args, Debug)]
pub struct LineArgs {
    /// Input volumetric density file (CHGCAR-like)
    pub input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "line_profile.png")]
    pub output: PathBuf,

    /// Start point in fractional coordinates, e.g. "0.5,0.5,0.0"
    #[arg(long)]
    pub from: String,

    /// End point in fractional coordinates, e.g. "0.5,0.5,1.0"
    #[arg(long)]
    pub to: String,

    /// Number of sample points along the line
    #[arg(short = 'n', long, default_value_t = 100)]
    pub samples: usize,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileOutputFormat>,

    /// Keep raw stored values (skip division by the cell volume)
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file name)
    #[arg(long)]
    pub title: Option<String>,
}

// ─────────────────────────────────────────────────────────────
// zavg 子命令
// ─────────────────────────────────────────────────────────────

/// 轴向平均参数
#[derive(Args, Debug)]
pub struct ZavgArgs {
    /// Input volumetric density file (CHGCAR-like)
    pub input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "z_average.png")]
    pub output: PathBuf,

    /// Axis to resolve the average along
    #[arg(short, long, value_enum, default_value = "z")]
    pub axis: AxisArg,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileOutputFormat>,

    /// Keep raw stored values (skip division by the cell volume)
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file name)
    #[arg(long)]
    pub title: Option<String>,
}

// ─────────────────────────────────────────────────────────────
// radial 子命令
// ─────────────────────────────────────────────────────────────

/// 球面平均参数
#[derive(Args, Debug)]
pub struct RadialArgs {
    /// Input volumetric density file (CHGCAR-like)
    pub input: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "spherical_average.png")]
    pub output: PathBuf,

    /// Center point in fractional coordinates
    #[arg(short, long, default_value = "0.5,0.5,0.5")]
    pub center: String,

    /// Maximum radius in Angstrom (default: half the shortest lattice vector)
    #[arg(long)]
    pub rmax: Option<f64>,

    /// Number of radial bins
    #[arg(short, long, default_value_t = 100)]
    pub bins: usize,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileOutputFormat>,

    /// Keep raw stored values (skip division by the cell volume)
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: input file name)
    #[arg(long)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("0.5,0.5,0.5").unwrap(), [0.5, 0.5, 0.5]);
        assert_eq!(parse_vector("1, 0, -0.25").unwrap(), [1.0, 0.0, -0.25]);
    }

    #[test]
    fn test_parse_vector_rejects_wrong_arity() {
        assert!(parse_vector("0.5,0.5").is_err());
        assert!(parse_vector("1,2,3,4").is_err());
    }

    #[test]
    fn test_parse_vector_rejects_non_numeric() {
        assert!(parse_vector("a,b,c").is_err());
    }
}
