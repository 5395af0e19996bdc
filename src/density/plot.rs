//! # 图表生成
//!
//! 使用 `plotters` 库绘制剖面曲线和平面热图。
//!
//! ## 功能
//! - 一维剖面折线图（直线剖面、轴向平均、球面平均共用）
//! - 平面切割热图，可选对数色标
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/extract/` 和 `commands/plane.rs` 调用
//! - 使用 `density/profile.rs` 的 Profile 结构
//! - 使用 `plotters` 渲染图表

use crate::density::Profile;
use crate::error::{DenutilError, Result};
use crate::models::PlaneGrid;

use plotters::prelude::*;
use std::path::Path;

/// ColorBrewer RdBu-11 色标，低值为深蓝，高值为深红
const COLOR_STOPS: [(u8, u8, u8); 11] = [
    (0x05, 0x30, 0x61),
    (0x21, 0x66, 0xac),
    (0x43, 0x93, 0xc3),
    (0x92, 0xc5, 0xde),
    (0xd1, 0xe5, 0xf0),
    (0xf7, 0xf7, 0xf7),
    (0xfd, 0xdb, 0xc7),
    (0xf4, 0xa5, 0x82),
    (0xd6, 0x60, 0x4d),
    (0xb2, 0x18, 0x2b),
    (0x67, 0x00, 0x1f),
];

/// 在色标上按 t ∈ [0, 1] 线性插值
fn ramp_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let segments = (COLOR_STOPS.len() - 1) as f64;
    let position = t * segments;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    let frac = position - low as f64;

    let (r0, g0, b0) = COLOR_STOPS[low];
    let (r1, g1, b1) = COLOR_STOPS[high];

    RGBColor(
        (r0 as f64 + (r1 as f64 - r0 as f64) * frac) as u8,
        (g0 as f64 + (g1 as f64 - g0 as f64) * frac) as u8,
        (b0 as f64 + (b1 as f64 - b0 as f64) * frac) as u8,
    )
}

/// 生成剖面折线图
pub fn generate_profile_plot(
    profile: &Profile,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile_chart(&root, profile, title)?;
        root.present()
            .map_err(|e| DenutilError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_profile_chart(&root, profile, title)?;
        root.present()
            .map_err(|e| DenutilError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制剖面图表的核心逻辑
fn draw_profile_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    profile: &Profile,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    let x_min = profile.rows.first().map(|r| r.abscissa).unwrap_or(0.0);
    let mut x_max = profile.rows.last().map(|r| r.abscissa).unwrap_or(1.0);
    if (x_max - x_min).abs() < 1e-12 {
        x_max = x_min + 1.0;
    }
    let (mut y_min, mut y_max) = profile.value_range();

    // 避免平坦剖面产生零高度坐标区
    if (y_max - y_min).abs() < 1e-12 {
        y_min -= 0.5;
        y_max += 0.5;
    }
    let pad = (y_max - y_min) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(profile.abscissa_label.as_str())
        .y_desc(profile.value_label.as_str())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(LineSeries::new(
            profile.rows.iter().map(|r| (r.abscissa, r.value)),
            BLACK.stroke_width(2),
        ))
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    Ok(())
}

/// 生成平面切割热图
///
/// `log` 为真时对取值做自然对数再映射到色标；调用方需事先
/// 用 `PlaneGrid::clamp_for_log` 保证取值为正。
pub fn generate_plane_heatmap(
    plane: &PlaneGrid,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    log: bool,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_heatmap_chart(&root, plane, title, log)?;
        root.present()
            .map_err(|e| DenutilError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_heatmap_chart(&root, plane, title, log)?;
        root.present()
            .map_err(|e| DenutilError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制热图的核心逻辑
fn draw_heatmap_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    plane: &PlaneGrid,
    title: &str,
    log: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    let nx = plane.nx as usize;
    let ny = plane.ny as usize;

    let transform = |v: f32| {
        if log {
            (v as f64).ln()
        } else {
            v as f64
        }
    };

    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for v in &plane.values {
        let t = transform(*v);
        v_min = v_min.min(t);
        v_max = v_max.max(t);
    }
    if (v_max - v_min).abs() < 1e-12 {
        v_max = v_min + 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..nx as f64, 0.0..ny as f64)
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;

    for row in 0..ny {
        for col in 0..nx {
            let t = (transform(plane.get(row, col)) - v_min) / (v_max - v_min);
            let color = ramp_color(t);

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (col as f64, row as f64),
                        (col as f64 + 1.0, row as f64 + 1.0),
                    ],
                    color.filled(),
                )))
                .map_err(|e| DenutilError::Other(format!("{:?}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp_color(0.0), RGBColor(0x05, 0x30, 0x61));
        assert_eq!(ramp_color(1.0), RGBColor(0x67, 0x00, 0x1f));
    }

    #[test]
    fn test_ramp_midpoint_is_neutral() {
        // t = 0.5 正好落在中间的近白色停靠点上
        assert_eq!(ramp_color(0.5), RGBColor(0xf7, 0xf7, 0xf7));
    }

    #[test]
    fn test_ramp_clamps_out_of_range() {
        assert_eq!(ramp_color(-1.0), ramp_color(0.0));
        assert_eq!(ramp_color(2.0), ramp_color(1.0));
    }
}
