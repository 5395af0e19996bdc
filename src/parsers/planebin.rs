//! # 二进制平面切割格式解析器
//!
//! 解析平面切割工具输出的原始二进制数据。
//!
//! ## 字节布局
//! ```text
//! bytes 0-3:  u32 小端, nx
//! bytes 4-7:  u32 小端, ny
//! bytes 8..:  nx*ny 个 f32 小端, 行主序, ny 行每行 nx 个
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/plane.rs` 使用
//! - 使用 `models/plane.rs`

use crate::error::{DenutilError, Result};
use crate::models::PlaneGrid;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 解析二进制平面切割文件
pub fn parse_plane_file(path: &Path) -> Result<PlaneGrid> {
    let file = File::open(path).map_err(|e| DenutilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_plane_reader(BufReader::new(file), &path.display().to_string())
}

/// 从任意读取器解析平面切割数据
pub fn parse_plane_reader<R: Read>(mut reader: R, path: &str) -> Result<PlaneGrid> {
    let nx = read_u32(&mut reader, path, 0)?;
    let ny = read_u32(&mut reader, path, 4)?;

    let count = nx as usize * ny as usize;
    let mut values = Vec::with_capacity(count);
    let mut buf = [0u8; 4];

    for i in 0..count {
        reader
            .read_exact(&mut buf)
            .map_err(|_| DenutilError::TruncatedPlane {
                path: path.to_string(),
                expected: 8 + count * 4,
                found: 8 + i * 4,
            })?;
        values.push(f32::from_le_bytes(buf));
    }

    Ok(PlaneGrid { nx, ny, values })
}

fn read_u32<R: Read>(reader: &mut R, path: &str, offset: usize) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|_| DenutilError::TruncatedPlane {
            path: path.to_string(),
            expected: 8,
            found: offset,
        })?;
    Ok(u32::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(nx: u32, ny: u32, values: &[f32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&nx.to_le_bytes());
        bytes.extend_from_slice(&ny.to_le_bytes());
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_parse_single_row() {
        let bytes = encode(2, 1, &[1.5, -2.5]);
        let plane = parse_plane_reader(bytes.as_slice(), "plane.bin").unwrap();

        assert_eq!(plane.nx, 2);
        assert_eq!(plane.ny, 1);
        assert_eq!(plane.get(0, 0), 1.5);
        assert_eq!(plane.get(0, 1), -2.5);
    }

    #[test]
    fn test_parse_two_rows() {
        let bytes = encode(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let plane = parse_plane_reader(bytes.as_slice(), "plane.bin").unwrap();

        assert_eq!(plane.get(1, 0), 3.0);
        assert_eq!(plane.get(1, 1), 4.0);
    }

    #[test]
    fn test_truncated_dimensions() {
        let result = parse_plane_reader(&[0x02u8, 0x00][..], "plane.bin");
        assert!(matches!(result, Err(DenutilError::TruncatedPlane { .. })));
    }

    #[test]
    fn test_truncated_values() {
        let mut bytes = encode(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        bytes.truncate(bytes.len() - 5);
        let result = parse_plane_reader(bytes.as_slice(), "plane.bin");
        assert!(matches!(
            result,
            Err(DenutilError::TruncatedPlane {
                expected: 24,
                found: 16,
                ..
            })
        ));
    }
}
