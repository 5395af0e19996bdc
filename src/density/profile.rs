//! # 密度剖面计算
//!
//! 从三维网格提取一维剖面：直线剖面、轴向平均和球面平均。
//!
//! CHGCAR 类文件存储的是 rho*V，默认除以晶胞体积得到密度；
//! `normalize = false` 时按原始值输出。
//!
//! ## 依赖关系
//! - 被 `commands/extract/` 调用
//! - 使用 `models/grid.rs`, `models/lattice.rs`

use crate::error::{DenutilError, Result};
use crate::models::{Axis, DensityGrid, Lattice};

/// 剖面上的一个采样点
#[derive(Debug, Clone)]
pub struct ProfileRow {
    /// 采样点的笛卡尔坐标（仅直线剖面填写）
    pub position: Option<[f64; 3]>,
    /// 横坐标（距离或轴向位置，Å）
    pub abscissa: f64,
    pub value: f64,
}

/// 一维剖面
#[derive(Debug, Clone)]
pub struct Profile {
    pub rows: Vec<ProfileRow>,
    pub abscissa_label: String,
    pub value_label: String,
}

impl Profile {
    /// 剖面的值域范围
    pub fn value_range(&self) -> (f64, f64) {
        let min = self
            .rows
            .iter()
            .map(|r| r.value)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .rows
            .iter()
            .map(|r| r.value)
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

fn value_label(normalize: bool) -> String {
    if normalize {
        "rho [1/A^3]".to_string()
    } else {
        "value".to_string()
    }
}

fn scale_factor(lattice: &Lattice, normalize: bool) -> f64 {
    if normalize {
        1.0 / lattice.volume().abs()
    } else {
        1.0
    }
}

/// 两个分数坐标点之间的直线剖面
///
/// 在 `from` 和 `to`（含端点）之间均匀取 `samples` 个点做
/// 三线性插值，横坐标为到起点的笛卡尔距离。
pub fn line_profile(
    grid: &DensityGrid,
    lattice: &Lattice,
    from: [f64; 3],
    to: [f64; 3],
    samples: usize,
    normalize: bool,
) -> Result<Profile> {
    if samples < 2 {
        return Err(DenutilError::InvalidArgument(format!(
            "line profile needs at least 2 samples, got {}",
            samples
        )));
    }

    let scale = scale_factor(lattice, normalize);
    let start = lattice.frac_to_cart(from);

    let mut rows = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = i as f64 / (samples - 1) as f64;
        let frac = [
            from[0] + t * (to[0] - from[0]),
            from[1] + t * (to[1] - from[1]),
            from[2] + t * (to[2] - from[2]),
        ];
        let cart = lattice.frac_to_cart(frac);
        let distance = ((cart[0] - start[0]).powi(2)
            + (cart[1] - start[1]).powi(2)
            + (cart[2] - start[2]).powi(2))
        .sqrt();

        rows.push(ProfileRow {
            position: Some(cart),
            abscissa: distance,
            value: grid.interpolate(frac) * scale,
        });
    }

    Ok(Profile {
        rows,
        abscissa_label: "r [A]".to_string(),
        value_label: value_label(normalize),
    })
}

/// 沿一个轴的平面平均
///
/// 对轴向的每个网格下标取其余两个方向的平均值，横坐标为
/// 该下标对应的轴向位置。
pub fn axis_average(
    grid: &DensityGrid,
    lattice: &Lattice,
    axis: Axis,
    normalize: bool,
) -> Profile {
    let scale = scale_factor(lattice, normalize);
    let n = grid.shape[axis.index()];
    let plane_points = (grid.len() / n) as f64;

    let (a, b, c, _, _, _) = lattice.parameters();
    let axis_length = match axis {
        Axis::X => a,
        Axis::Y => b,
        Axis::Z => c,
    };

    let rows = (0..n)
        .map(|index| ProfileRow {
            position: None,
            abscissa: index as f64 / n as f64 * axis_length,
            value: grid.plane_sum(axis, index) / plane_points * scale,
        })
        .collect();

    Profile {
        rows,
        abscissa_label: format!("{} [A]", axis),
        value_label: value_label(normalize),
    }
}

/// 围绕中心点的球面平均
///
/// 所有网格点按到中心的笛卡尔距离分入 `bins` 个均匀半径区间，
/// 空区间的值为 0。
pub fn spherical_average(
    grid: &DensityGrid,
    lattice: &Lattice,
    center: [f64; 3],
    rmax: f64,
    bins: usize,
    normalize: bool,
) -> Result<Profile> {
    if bins == 0 {
        return Err(DenutilError::InvalidArgument(
            "spherical average needs at least 1 bin".to_string(),
        ));
    }
    if rmax <= 0.0 {
        return Err(DenutilError::InvalidArgument(format!(
            "rmax must be positive, got {}",
            rmax
        )));
    }

    let scale = scale_factor(lattice, normalize);
    let center_cart = lattice.frac_to_cart(center);
    let [nx, ny, nz] = grid.shape;

    let mut sums = vec![0.0f64; bins];
    let mut counts = vec![0usize; bins];
    let dr = rmax / bins as f64;

    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let frac = [i as f64 / nx as f64, j as f64 / ny as f64, k as f64 / nz as f64];
                let cart = lattice.frac_to_cart(frac);
                let distance = ((cart[0] - center_cart[0]).powi(2)
                    + (cart[1] - center_cart[1]).powi(2)
                    + (cart[2] - center_cart[2]).powi(2))
                .sqrt();

                let bin = (distance / dr) as usize;
                if bin < bins {
                    sums[bin] += grid.get(i, j, k);
                    counts[bin] += 1;
                }
            }
        }
    }

    let rows = (0..bins)
        .map(|b| ProfileRow {
            position: None,
            abscissa: (b as f64 + 0.5) * dr,
            value: if counts[b] > 0 {
                sums[b] / counts[b] as f64 * scale
            } else {
                0.0
            },
        })
        .collect();

    Ok(Profile {
        rows,
        abscissa_label: "r [A]".to_string(),
        value_label: value_label(normalize),
    })
}
