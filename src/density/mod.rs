//! # 密度分析模块
//!
//! 提供体数据网格的统计、剖面提取、导出与绘图功能。
//!
//! ## 子模块
//! - `stats`: 网格汇总统计
//! - `profile`: 直线剖面、轴向平均、球面平均
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

pub mod export;
pub mod plot;
pub mod profile;
pub mod stats;

pub use profile::{axis_average, line_profile, spherical_average, Profile, ProfileRow};
pub use stats::GridStats;
