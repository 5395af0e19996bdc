//! # 数据模型模块
//!
//! 定义体数据网格、平面切割和晶格的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`density/` 和 `commands/` 使用
//! - 子模块: grid, plane, lattice

pub mod grid;
pub mod lattice;
pub mod plane;

pub use grid::{Axis, DensityGrid};
pub use lattice::Lattice;
pub use plane::{PlaneGrid, LOG_FLOOR};
