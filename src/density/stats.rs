//! # 网格统计
//!
//! 计算体数据网格的汇总统计量。
//!
//! ## 依赖关系
//! - 被 `commands/info.rs` 调用
//! - 使用 `models/grid.rs`

use crate::models::DensityGrid;
use serde::{Deserialize, Serialize};

/// 一个网格的汇总统计量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStats {
    /// 网格维度
    pub shape: [usize; 3],
    /// 网格点总数
    pub points: usize,
    /// 总原子数
    pub atom_count: usize,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
}

impl GridStats {
    /// 对网格计算统计量
    pub fn compute(grid: &DensityGrid) -> GridStats {
        GridStats {
            shape: grid.shape,
            points: grid.len(),
            atom_count: grid.atom_count(),
            min: grid.min(),
            max: grid.max(),
            sum: grid.sum(),
            mean: grid.mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let grid = DensityGrid {
            metadata: vec![String::new(); 6],
            species_counts: vec![2, 1],
            shape: [2, 2, 1],
            values: vec![1.0, 2.0, 3.0, 4.0],
        };
        let stats = GridStats::compute(&grid);

        assert_eq!(stats.shape, [2, 2, 1]);
        assert_eq!(stats.points, 4);
        assert_eq!(stats.atom_count, 3);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.sum, 10.0);
        assert!((stats.mean - 2.5).abs() < 1e-12);
    }
}
