//! # 剖面数据导出
//!
//! 导出一维剖面到 CSV 和 DAT 格式。
//!
//! ## 支持格式
//! - CSV: 带表头的逗号分隔数据
//! - DAT: `#` 注释头 + 空白分隔数据，可被 numpy loadtxt 直接读取
//!
//! 直线剖面额外带出采样点坐标 (x, y, z, value)，其余剖面为
//! 两列 (横坐标, value)。
//!
//! ## 依赖关系
//! - 被 `commands/extract/` 调用
//! - 使用 `density/profile.rs` 的 Profile 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::density::Profile;
use crate::error::{DenutilError, Result};

use std::fs;
use std::path::Path;

/// 横坐标在表头里的短名（取标签的第一个词）
fn abscissa_name(profile: &Profile) -> String {
    profile
        .abscissa_label
        .split_whitespace()
        .next()
        .unwrap_or("r")
        .to_string()
}

/// 导出剖面为 CSV 格式
pub fn to_csv(profile: &Profile, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(DenutilError::CsvError)?;

    let with_position = profile.rows.iter().any(|r| r.position.is_some());

    if with_position {
        wtr.write_record(["x", "y", "z", "value"])
            .map_err(DenutilError::CsvError)?;
    } else {
        wtr.write_record([abscissa_name(profile).as_str(), "value"])
            .map_err(DenutilError::CsvError)?;
    }

    for row in &profile.rows {
        match row.position {
            Some(pos) => {
                wtr.write_record(&[
                    format!("{:.6}", pos[0]),
                    format!("{:.6}", pos[1]),
                    format!("{:.6}", pos[2]),
                    format!("{:.8e}", row.value),
                ])
                .map_err(DenutilError::CsvError)?;
            }
            None => {
                wtr.write_record(&[
                    format!("{:.6}", row.abscissa),
                    format!("{:.8e}", row.value),
                ])
                .map_err(DenutilError::CsvError)?;
            }
        }
    }

    wtr.flush().map_err(|e| DenutilError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出剖面为 DAT 格式
pub fn to_dat(profile: &Profile, title: &str, output_path: &Path) -> Result<()> {
    let mut result = String::new();

    result.push_str(&format!("# {}\n", title));

    let with_position = profile.rows.iter().any(|r| r.position.is_some());
    if with_position {
        result.push_str(&format!(
            "# Columns: x [A], y [A], z [A], {}\n",
            profile.value_label
        ));
    } else {
        result.push_str(&format!(
            "# Columns: {}, {}\n",
            profile.abscissa_label, profile.value_label
        ));
    }
    result.push_str("#\n");

    for row in &profile.rows {
        match row.position {
            Some(pos) => {
                result.push_str(&format!(
                    "{:12.6} {:12.6} {:12.6} {:16.8e}\n",
                    pos[0], pos[1], pos[2], row.value
                ));
            }
            None => {
                result.push_str(&format!("{:12.6} {:16.8e}\n", row.abscissa, row.value));
            }
        }
    }

    fs::write(output_path, result).map_err(|e| DenutilError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::ProfileRow;

    fn sample_profile(with_position: bool) -> Profile {
        Profile {
            rows: vec![
                ProfileRow {
                    position: with_position.then_some([0.0, 0.0, 0.0]),
                    abscissa: 0.0,
                    value: 1.0,
                },
                ProfileRow {
                    position: with_position.then_some([1.0, 0.0, 0.0]),
                    abscissa: 1.0,
                    value: 2.0,
                },
            ],
            abscissa_label: "r [A]".to_string(),
            value_label: "value".to_string(),
        }
    }

    #[test]
    fn test_abscissa_name() {
        assert_eq!(abscissa_name(&sample_profile(false)), "r");
    }

    #[test]
    fn test_dat_two_columns() {
        let dir = std::env::temp_dir();
        let path = dir.join("denutil_test_profile.dat");
        to_dat(&sample_profile(false), "test profile", &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# test profile\n"));
        assert!(content.contains("# Columns: r [A], value"));
        // 两行数据
        let data_lines: Vec<&str> = content
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect();
        assert_eq!(data_lines.len(), 2);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_dat_four_columns_for_line_profile() {
        let dir = std::env::temp_dir();
        let path = dir.join("denutil_test_line.dat");
        to_dat(&sample_profile(true), "line", &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let first_data = content.lines().find(|l| !l.starts_with('#')).unwrap();
        assert_eq!(first_data.split_whitespace().count(), 4);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_round_trip_rows() {
        let dir = std::env::temp_dir();
        let path = dir.join("denutil_test_profile.csv");
        to_csv(&sample_profile(false), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.records().count(), 2);

        fs::remove_file(&path).ok();
    }
}
