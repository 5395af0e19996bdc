//! # 平面切割数据模型
//!
//! 定义二进制平面切割文件解析后的二维网格。
//!
//! ## 依赖关系
//! - 被 `parsers/planebin.rs` 构造
//! - 被 `commands/plane.rs` 和 `density/plot.rs` 消费

use serde::{Deserialize, Serialize};

/// 对数显示时的最小正下限
pub const LOG_FLOOR: f32 = 1e-8;

/// 一个平面切割网格（ny 行，每行 nx 个值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneGrid {
    /// 每行的值数
    pub nx: u32,

    /// 行数
    pub ny: u32,

    /// 平铺的值，行主序
    pub values: Vec<f32>,
}

impl PlaneGrid {
    /// 取第 `row` 行第 `col` 列的值
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.nx as usize + col]
    }

    pub fn min(&self) -> f32 {
        self.values.iter().copied().fold(f32::INFINITY, f32::min)
    }

    pub fn max(&self) -> f32 {
        self.values
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// 为对数显示做下限截断
    ///
    /// 下限取全场最小绝对值；若为 0 则取 `LOG_FLOOR`。
    /// 每个元素被替换为 `max(下限, 元素)`，非零量级保持不变。
    pub fn clamp_for_log(&self) -> PlaneGrid {
        let mut floor = self
            .values
            .iter()
            .map(|v| v.abs())
            .fold(f32::INFINITY, f32::min);
        if floor == 0.0 {
            floor = LOG_FLOOR;
        }

        PlaneGrid {
            nx: self.nx,
            ny: self.ny,
            values: self.values.iter().map(|v| v.max(floor)).collect(),
        }
    }
}
