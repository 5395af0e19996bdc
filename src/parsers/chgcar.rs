//! # CHGCAR 体数据格式解析器
//!
//! 解析 VASP CHGCAR 类的纯文本体数据文件（CHGCAR/LOCPOT/PARCHG）。
//!
//! ## 格式说明
//! ```text
//! line 1-6:  元数据（注释、缩放因子、晶格向量、元素符号），原样保留
//! line 7:    每种元素的原子数，总和 = N
//! 接下来 N+2 行: 坐标类型行 + N 行原子坐标 + 1 行分隔，跳过
//! 下一行:    网格维度 "nx ny nz"
//! 其余行:    平铺的网格值，行主序，读满 nx*ny*nz 个为止
//! ```
//!
//! 读取是单遍、只进的线性扫描。读满所需数量后同一行的剩余
//! 字段被忽略；在读满之前遇到空行或文件结束是格式错误。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/grid.rs`

use crate::error::{DenutilError, Result};
use crate::models::DensityGrid;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 每行写出的网格值个数（写出时使用）
const VALUES_PER_LINE: usize = 5;

/// 解析 CHGCAR 类文件
pub fn parse_density_file(path: &Path) -> Result<DensityGrid> {
    let file = File::open(path).map_err(|e| DenutilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_density_reader(BufReader::new(file), &path.display().to_string())
}

/// 从任意带缓冲的读取器解析 CHGCAR 格式
///
/// 五个阶段：元数据、原子计数、坐标块、网格维度、网格值。
pub fn parse_density_reader<R: BufRead>(reader: R, path: &str) -> Result<DensityGrid> {
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    // 阶段 1: 保留 6 行元数据，内容不做解释
    let mut metadata = Vec::with_capacity(6);
    for _ in 0..6 {
        metadata.push(next_line(&mut lines, &mut line_no, path)?);
    }

    // 阶段 2: 原子计数行，各整数之和为总原子数
    let atom_line = next_line(&mut lines, &mut line_no, path)?;
    let species_counts = parse_integers(&atom_line, line_no, path)?;
    let atom_count: usize = species_counts.iter().sum();

    // 阶段 3: 跳过坐标类型行、原子坐标和分隔行
    for _ in 0..atom_count + 2 {
        next_line(&mut lines, &mut line_no, path)?;
    }

    // 阶段 4: 网格维度
    let shape_line = next_line(&mut lines, &mut line_no, path)?;
    let dims = parse_integers(&shape_line, line_no, path)?;
    if dims.len() != 3 {
        return Err(DenutilError::MalformedHeader {
            path: path.to_string(),
            reason: format!("expected 3 grid dimensions, found {}", dims.len()),
        });
    }
    if dims.contains(&0) {
        return Err(DenutilError::MalformedHeader {
            path: path.to_string(),
            reason: format!("grid dimensions must be positive, got '{}'", shape_line.trim()),
        });
    }
    let shape = [dims[0], dims[1], dims[2]];
    let total = shape[0] * shape[1] * shape[2];

    // 阶段 5: 网格值，读满 total 个为止
    let mut values: Vec<f64> = Vec::with_capacity(total);
    'collect: while values.len() < total {
        line_no += 1;
        let line = match lines.next() {
            Some(Ok(l)) => l,
            Some(Err(e)) => {
                return Err(DenutilError::FileReadError {
                    path: path.to_string(),
                    source: e,
                })
            }
            None => {
                return Err(DenutilError::IncompleteGrid {
                    path: path.to_string(),
                    expected: total,
                    found: values.len(),
                })
            }
        };

        // 空行是数据段的提前结束，按格式错误处理
        if line.trim().is_empty() {
            return Err(DenutilError::IncompleteGrid {
                path: path.to_string(),
                expected: total,
                found: values.len(),
            });
        }

        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| DenutilError::MalformedFloat {
                path: path.to_string(),
                line: line_no,
                token: token.to_string(),
            })?;
            values.push(value);

            // 行内多余的字段被忽略
            if values.len() == total {
                break 'collect;
            }
        }
    }

    Ok(DensityGrid {
        metadata,
        species_counts,
        shape,
        values,
    })
}

/// 按文档化布局写出网格
///
/// 坐标块写成 "Direct" + 每原子一行零坐标 + 空行，与读取端
/// 跳过的行数一致。
pub fn to_density_string(grid: &DensityGrid) -> String {
    let mut result = String::new();

    for line in &grid.metadata {
        result.push_str(line);
        result.push('\n');
    }

    let counts: Vec<String> = grid.species_counts.iter().map(|c| c.to_string()).collect();
    result.push_str(&format!("   {}\n", counts.join("   ")));

    result.push_str("Direct\n");
    for _ in 0..grid.atom_count() {
        result.push_str("  0.0000000000  0.0000000000  0.0000000000\n");
    }
    result.push('\n');

    result.push_str(&format!(
        "   {}   {}   {}\n",
        grid.shape[0], grid.shape[1], grid.shape[2]
    ));

    for chunk in grid.values.chunks(VALUES_PER_LINE) {
        let fields: Vec<String> = chunk.iter().map(|v| format!("{:.11E}", v)).collect();
        result.push_str(&format!(" {}\n", fields.join(" ")));
    }

    result
}

/// 读取下一行，流结束时报头部截断
fn next_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    line_no: &mut usize,
    path: &str,
) -> Result<String> {
    *line_no += 1;
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(e)) => Err(DenutilError::FileReadError {
            path: path.to_string(),
            source: e,
        }),
        None => Err(DenutilError::TruncatedHeader {
            path: path.to_string(),
            line: *line_no,
        }),
    }
}

/// 把一行按空白拆分并解析为整数列表
fn parse_integers(line: &str, line_no: usize, path: &str) -> Result<Vec<usize>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(DenutilError::MalformedInteger {
            path: path.to_string(),
            line: line_no,
            token: "(empty line)".to_string(),
        });
    }

    tokens
        .iter()
        .map(|t| {
            t.parse::<usize>().map_err(|_| DenutilError::MalformedInteger {
                path: path.to_string(),
                line: line_no,
                token: t.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(content: &str) -> Result<DensityGrid> {
        parse_density_reader(Cursor::new(content), "test")
    }

    #[test]
    fn test_parse_reference_layout() {
        // h1..h6, 原子行 "2 1" (N=3), 3 行坐标 + 2 行分隔, 形状 2 2 1
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       2 1\n\
                       Direct\n\
                       a1\na2\na3\n\
                       \n\
                       2 2 1\n\
                       1.0 2.0\n3.0 4.0\n";
        let grid = parse(content).unwrap();

        assert_eq!(grid.metadata, vec!["h1", "h2", "h3", "h4", "h5", "h6"]);
        assert_eq!(grid.species_counts, vec![2, 1]);
        assert_eq!(grid.atom_count(), 3);
        assert_eq!(grid.shape, [2, 2, 1]);
        assert_eq!(grid.values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(grid.get(0, 0, 0), 1.0);
        assert_eq!(grid.get(0, 1, 0), 2.0);
        assert_eq!(grid.get(1, 0, 0), 3.0);
        assert_eq!(grid.get(1, 1, 0), 4.0);
    }

    #[test]
    fn test_parse_single_point_grid() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       1\n\
                       Direct\n\
                       a1\n\
                       \n\
                       1 1 1\n\
                       42.0\n";
        let grid = parse(content).unwrap();
        assert_eq!(grid.shape, [1, 1, 1]);
        assert_eq!(grid.values, vec![42.0]);
    }

    #[test]
    fn test_zero_atoms_skips_two_lines() {
        // N = 0: 原子行之后恰好跳过 2 行
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\
                       \n\
                       1 1 2\n\
                       1.0 2.0\n";
        let grid = parse(content).unwrap();
        assert_eq!(grid.atom_count(), 0);
        assert_eq!(grid.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        // 读满 4 个值后同一行和之后的内容不再解析
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       1\n\
                       Direct\na1\n\n\
                       2 2 1\n\
                       1.0 2.0 3.0 4.0 99.0 not-a-number\n\
                       garbage\n";
        let grid = parse(content).unwrap();
        assert_eq!(grid.values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_truncated_header() {
        let result = parse("h1\nh2\nh3\n");
        assert!(matches!(
            result,
            Err(DenutilError::TruncatedHeader { line: 4, .. })
        ));
    }

    #[test]
    fn test_truncated_coordinate_block() {
        // N = 2 但坐标块只剩 1 行
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       2\n\
                       Direct\n";
        let result = parse(content);
        assert!(matches!(result, Err(DenutilError::TruncatedHeader { .. })));
    }

    #[test]
    fn test_malformed_atom_count() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       two atoms\n";
        let result = parse(content);
        assert!(matches!(
            result,
            Err(DenutilError::MalformedInteger { line: 7, .. })
        ));
    }

    #[test]
    fn test_malformed_shape_line() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       nx ny nz\n";
        let result = parse(content);
        assert!(matches!(result, Err(DenutilError::MalformedInteger { .. })));
    }

    #[test]
    fn test_shape_needs_three_dimensions() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       2 2\n\
                       1.0 2.0 3.0 4.0\n";
        let result = parse(content);
        assert!(matches!(result, Err(DenutilError::MalformedHeader { .. })));
    }

    #[test]
    fn test_malformed_float_in_values() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       2 1 1\n\
                       1.0 abc\n";
        let result = parse(content);
        assert!(matches!(result, Err(DenutilError::MalformedFloat { .. })));
    }

    #[test]
    fn test_blank_line_before_count_reached() {
        // 空行出现在读满之前：不返回截断的网格
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       2 2 1\n\
                       1.0 2.0\n\
                       \n\
                       3.0 4.0\n";
        let result = parse(content);
        assert!(matches!(
            result,
            Err(DenutilError::IncompleteGrid {
                expected: 4,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_eof_before_count_reached() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       2 2 2\n\
                       1.0 2.0 3.0\n";
        let result = parse(content);
        assert!(matches!(
            result,
            Err(DenutilError::IncompleteGrid {
                expected: 8,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_round_trip() {
        let grid = DensityGrid {
            metadata: vec![
                "CH4".to_string(),
                "1.0".to_string(),
                "  10.0  0.0  0.0".to_string(),
                "  0.0  10.0  0.0".to_string(),
                "  0.0  0.0  10.0".to_string(),
                "  C  H".to_string(),
            ],
            species_counts: vec![1, 4],
            shape: [2, 3, 2],
            values: (0..12).map(|v| v as f64 * 0.5).collect(),
        };

        let text = to_density_string(&grid);
        let parsed = parse_density_reader(Cursor::new(text.as_str()), "round_trip").unwrap();

        assert_eq!(parsed.metadata, grid.metadata);
        assert_eq!(parsed.species_counts, grid.species_counts);
        assert_eq!(parsed.shape, grid.shape);
        assert_eq!(parsed.values, grid.values);
    }

    #[test]
    fn test_reshape_is_lossless() {
        let content = "h1\nh2\nh3\nh4\nh5\nh6\n\
                       0\n\
                       Direct\n\n\
                       2 3 4\n\
                       0 1 2 3 4\n5 6 7 8 9\n10 11 12 13 14\n\
                       15 16 17 18 19\n20 21 22 23\n";
        let grid = parse(content).unwrap();
        assert_eq!(grid.len(), 24);

        // 按 (i, j, k) 顺序重新平铺应还原原始序列
        let mut flattened = Vec::new();
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    flattened.push(grid.get(i, j, k));
                }
            }
        }
        assert_eq!(flattened, grid.values);
    }
}
