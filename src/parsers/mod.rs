//! # 解析器模块
//!
//! 提供体数据文件格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: chgcar, planebin

pub mod chgcar;
pub mod planebin;

pub use chgcar::{parse_density_file, parse_density_reader, to_density_string};
pub use planebin::{parse_plane_file, parse_plane_reader};
