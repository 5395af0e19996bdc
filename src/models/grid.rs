//! # 体数据网格数据模型
//!
//! 定义解析 CHGCAR 类文件后得到的三维标量场网格。
//!
//! ## 存储约定
//! 网格值按行主序（最后声明的维度变化最快）平铺存储：
//! `(i, j, k)` 处的值位于 `(i * ny + j) * nz + k`。
//!
//! ## 依赖关系
//! - 被 `parsers/chgcar.rs` 构造
//! - 被 `density/` 和 `commands/` 消费
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 网格坐标轴（对应 shape 声明的三个维度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// 轴在 shape 中的下标
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// 一次解析得到的体数据网格
///
/// 构造后不可变；`values.len() == shape[0] * shape[1] * shape[2]`
/// 由解析器保证。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityGrid {
    /// 文件头部的 6 行原始元数据（解析器不解释，原样保留）
    pub metadata: Vec<String>,

    /// 每种元素的原子数（原子计数行的各整数）
    pub species_counts: Vec<usize>,

    /// 网格维度 (nx, ny, nz)
    pub shape: [usize; 3],

    /// 平铺的网格值，行主序
    pub values: Vec<f64>,
}

impl DensityGrid {
    /// 总原子数
    pub fn atom_count(&self) -> usize {
        self.species_counts.iter().sum()
    }

    /// 网格点总数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 取网格点 (i, j, k) 处的值
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        let [_, ny, nz] = self.shape;
        self.values[(i * ny + j) * nz + k]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// 对一个网格平面求和（固定 `axis` 方向的下标为 `index`）
    pub fn plane_sum(&self, axis: Axis, index: usize) -> f64 {
        let [nx, ny, nz] = self.shape;
        let mut sum = 0.0;
        match axis {
            Axis::X => {
                for j in 0..ny {
                    for k in 0..nz {
                        sum += self.get(index, j, k);
                    }
                }
            }
            Axis::Y => {
                for i in 0..nx {
                    for k in 0..nz {
                        sum += self.get(i, index, k);
                    }
                }
            }
            Axis::Z => {
                for i in 0..nx {
                    for j in 0..ny {
                        sum += self.get(i, j, index);
                    }
                }
            }
        }
        sum
    }

    /// 中心切片求和
    ///
    /// 偶数点数的轴取中点两侧平面各 0.5 权重，奇数点数取正中平面。
    pub fn center_slice_sum(&self, axis: Axis) -> f64 {
        let n = self.shape[axis.index()];
        if n % 2 == 0 && n >= 2 {
            0.5 * self.plane_sum(axis, n / 2 - 1) + 0.5 * self.plane_sum(axis, n / 2)
        } else {
            self.plane_sum(axis, n / 2)
        }
    }

    /// 在分数坐标处做三线性插值
    ///
    /// 分数坐标超出 [0, 1] 域时返回 0.0。
    pub fn interpolate(&self, frac: [f64; 3]) -> f64 {
        for d in frac {
            if !(0.0..=1.0).contains(&d) {
                return 0.0;
            }
        }

        let [nx, ny, nz] = self.shape;
        let gx = frac[0] * (nx - 1) as f64;
        let gy = frac[1] * (ny - 1) as f64;
        let gz = frac[2] * (nz - 1) as f64;

        let x0 = gx.floor() as usize;
        let y0 = gy.floor() as usize;
        let z0 = gz.floor() as usize;
        let x1 = gx.ceil() as usize;
        let y1 = gy.ceil() as usize;
        let z1 = gz.ceil() as usize;

        let xd = gx - x0 as f64;
        let yd = gy - y0 as f64;
        let zd = gz - z0 as f64;

        self.get(x0, y0, z0) * (1.0 - xd) * (1.0 - yd) * (1.0 - zd)
            + self.get(x1, y0, z0) * xd * (1.0 - yd) * (1.0 - zd)
            + self.get(x0, y1, z0) * (1.0 - xd) * yd * (1.0 - zd)
            + self.get(x0, y0, z1) * (1.0 - xd) * (1.0 - yd) * zd
            + self.get(x1, y0, z1) * xd * (1.0 - yd) * zd
            + self.get(x0, y1, z1) * (1.0 - xd) * yd * zd
            + self.get(x1, y1, z0) * xd * yd * (1.0 - zd)
            + self.get(x1, y1, z1) * xd * yd * zd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> DensityGrid {
        // 2x2x2 网格，值 = 平铺下标
        DensityGrid {
            metadata: vec![String::new(); 6],
            species_counts: vec![1],
            shape: [2, 2, 2],
            values: (0..8).map(|v| v as f64).collect(),
        }
    }

    #[test]
    fn test_row_major_indexing() {
        let grid = sample_grid();
        assert_eq!(grid.get(0, 0, 0), 0.0);
        assert_eq!(grid.get(0, 0, 1), 1.0);
        assert_eq!(grid.get(0, 1, 0), 2.0);
        assert_eq!(grid.get(1, 0, 0), 4.0);
        assert_eq!(grid.get(1, 1, 1), 7.0);
    }

    #[test]
    fn test_stats() {
        let grid = sample_grid();
        assert_eq!(grid.min(), 0.0);
        assert_eq!(grid.max(), 7.0);
        assert_eq!(grid.sum(), 28.0);
        assert!((grid.mean() - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_plane_sum() {
        let grid = sample_grid();
        // k = 0 平面: 0 + 2 + 4 + 6
        assert_eq!(grid.plane_sum(Axis::Z, 0), 12.0);
        // i = 1 平面: 4 + 5 + 6 + 7
        assert_eq!(grid.plane_sum(Axis::X, 1), 22.0);
    }

    #[test]
    fn test_center_slice_even_axis() {
        let grid = sample_grid();
        // n = 2: 两平面各取一半
        let expected = 0.5 * grid.plane_sum(Axis::Z, 0) + 0.5 * grid.plane_sum(Axis::Z, 1);
        assert_eq!(grid.center_slice_sum(Axis::Z), expected);
    }

    #[test]
    fn test_center_slice_odd_axis() {
        let grid = DensityGrid {
            metadata: vec![String::new(); 6],
            species_counts: vec![],
            shape: [1, 1, 3],
            values: vec![1.0, 2.0, 4.0],
        };
        assert_eq!(grid.center_slice_sum(Axis::Z), 2.0);
    }

    #[test]
    fn test_interpolate_at_grid_points() {
        let grid = sample_grid();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let frac = [i as f64, j as f64, k as f64];
                    assert!((grid.interpolate(frac) - grid.get(i, j, k)).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_interpolate_midpoint() {
        let grid = sample_grid();
        // 体心插值 = 所有顶点的平均
        let v = grid.interpolate([0.5, 0.5, 0.5]);
        assert!((v - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_interpolate_outside_cell() {
        let grid = sample_grid();
        assert_eq!(grid.interpolate([1.5, 0.5, 0.5]), 0.0);
        assert_eq!(grid.interpolate([0.5, -0.1, 0.5]), 0.0);
    }
}
