//! # 晶格数据模型
//!
//! 从体数据文件头部的元数据行解析晶格，提供分数坐标与
//! 笛卡尔坐标的互换以及体积计算。
//!
//! ## 头部约定
//! ```text
//! line 1: comment
//! line 2: scaling factor
//! line 3-5: lattice vectors a, b, c
//! line 6: element symbols
//! ```
//! 核心解析器不解释这些行；只有需要实空间坐标的操作才会
//! 调用 `Lattice::from_header`。
//!
//! ## 依赖关系
//! - 被 `density/` 和 `commands/` 使用
//! - 使用 `regex` 匹配晶格向量行

use crate::error::{DenutilError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 从体数据文件的元数据行解析晶格
    ///
    /// 第 2 行为缩放因子，第 3-5 行为晶格向量，向量乘以缩放因子。
    pub fn from_header(metadata: &[String], path: &str) -> Result<Lattice> {
        if metadata.len() < 5 {
            return Err(DenutilError::MalformedHeader {
                path: path.to_string(),
                reason: format!("expected 6 metadata lines, found {}", metadata.len()),
            });
        }

        let scale: f64 =
            metadata[1]
                .trim()
                .parse()
                .map_err(|_| DenutilError::MalformedHeader {
                    path: path.to_string(),
                    reason: format!("invalid scaling factor '{}'", metadata[1].trim()),
                })?;

        let re_vector = Regex::new(r"^\s*([0-9.Ee+-]+)\s+([0-9.Ee+-]+)\s+([0-9.Ee+-]+)\s*$")
            .expect("static regex");

        let mut matrix = [[0.0; 3]; 3];
        for i in 0..3 {
            let line = &metadata[2 + i];
            let caps = re_vector
                .captures(line)
                .ok_or_else(|| DenutilError::MalformedHeader {
                    path: path.to_string(),
                    reason: format!("invalid lattice vector line '{}'", line.trim()),
                })?;
            for j in 0..3 {
                let token = caps.get(j + 1).map(|m| m.as_str()).unwrap_or("");
                let value: f64 = token.parse().map_err(|_| DenutilError::MalformedHeader {
                    path: path.to_string(),
                    reason: format!("invalid lattice component '{}'", token),
                })?;
                matrix[i][j] = value * scale;
            }
        }

        Ok(Lattice { matrix })
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = (a_vec[0].powi(2) + a_vec[1].powi(2) + a_vec[2].powi(2)).sqrt();
        let b = (b_vec[0].powi(2) + b_vec[1].powi(2) + b_vec[2].powi(2)).sqrt();
        let c = (c_vec[0].powi(2) + c_vec[1].powi(2) + c_vec[2].powi(2)).sqrt();

        let dot_bc: f64 = b_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ac: f64 = a_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ab: f64 = a_vec.iter().zip(b_vec.iter()).map(|(x, y)| x * y).sum();

        let alpha = (dot_bc / (b * c)).acos().to_degrees();
        let beta = (dot_ac / (a * c)).acos().to_degrees();
        let gamma = (dot_ab / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 分数坐标转笛卡尔坐标
    pub fn frac_to_cart(&self, frac: [f64; 3]) -> [f64; 3] {
        let m = self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }

    /// 笛卡尔坐标转分数坐标
    ///
    /// 晶格矩阵奇异时原样返回输入。
    pub fn cart_to_frac(&self, cart: [f64; 3]) -> [f64; 3] {
        let m = self.matrix;
        let det = self.volume();

        if det.abs() < 1e-10 {
            return cart;
        }

        let inv = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ];

        [
            inv[0][0] * cart[0] + inv[0][1] * cart[1] + inv[0][2] * cart[2],
            inv[1][0] * cart[0] + inv[1][1] * cart[1] + inv[1][2] * cart[2],
            inv[2][0] * cart[0] + inv[2][1] * cart[1] + inv[2][2] * cart[2],
        ]
    }

    /// 最短晶格向量的长度
    pub fn min_vector_length(&self) -> f64 {
        let (a, b, c, _, _, _) = self.parameters();
        a.min(b).min(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_header(scale: f64, a: f64) -> Vec<String> {
        vec![
            "CH4 molecule".to_string(),
            format!("{:.10}", scale),
            format!("  {:.6}  0.000000  0.000000", a),
            format!("  0.000000  {:.6}  0.000000", a),
            format!("  0.000000  0.000000  {:.6}", a),
            "  C  H".to_string(),
        ]
    }

    #[test]
    fn test_from_header_cubic() {
        let lattice = Lattice::from_header(&cubic_header(1.0, 10.0), "CHGCAR").unwrap();
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 10.0).abs() < 1e-6);
        assert!((b - 10.0).abs() < 1e-6);
        assert!((c - 10.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_header_applies_scale() {
        let lattice = Lattice::from_header(&cubic_header(2.0, 5.0), "CHGCAR").unwrap();
        assert!((lattice.volume() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_header_rejects_bad_scale() {
        let mut header = cubic_header(1.0, 10.0);
        header[1] = "not-a-number".to_string();
        assert!(Lattice::from_header(&header, "CHGCAR").is_err());
    }

    #[test]
    fn test_from_header_rejects_bad_vector() {
        let mut header = cubic_header(1.0, 10.0);
        header[3] = "  1.0  2.0".to_string();
        assert!(Lattice::from_header(&header, "CHGCAR").is_err());
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [1.0, 4.0, 0.0], [0.0, 1.0, 4.0]]);
        let frac = [0.25, 0.5, 0.75];
        let cart = lattice.frac_to_cart(frac);
        let back = lattice.cart_to_frac(cart);

        for d in 0..3 {
            assert!((back[d] - frac[d]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_min_vector_length() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 5.0]]);
        assert!((lattice.min_vector_length() - 3.0).abs() < 1e-12);
    }
}
