//! # 批量处理模块
//!
//! 提供体数据文件的批量收集与并行处理能力。
//!
//! ## 功能
//! - 收集目录下匹配的体数据文件（glob 模式，可递归）
//! - 基于 rayon 的并行迭代
//! - 进度条显示与错误汇总
//!
//! ## 依赖关系
//! - 被 `commands/info.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `walkdir` 遍历目录
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认匹配的体数据文件名模式
pub const DEFAULT_PATTERNS: &str = "CHGCAR*,LOCPOT*,PARCHG*";

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 跳过
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    /// 成功文件的单行摘要
    pub summaries: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(msg) => {
                self.success += 1;
                self.summaries.push(msg);
            }
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 收集目录下匹配模式的体数据文件
///
/// `pattern` 为逗号分隔的多个 glob 模式；`recursive` 为假时
/// 只搜索第一层。
pub fn collect_files(input: &Path, pattern: &str, recursive: bool) -> Vec<PathBuf> {
    let patterns: Vec<String> = pattern
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let patterns = if patterns.is_empty() {
        vec!["*".to_string()]
    } else {
        patterns
    };

    let max_depth = if recursive { usize::MAX } else { 1 };

    WalkDir::new(input)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .file_name()
                .and_then(|n| n.to_str())
                .map(|name| patterns.iter().any(|p| glob_match(p, name)))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// 简单 glob 匹配（支持 * 和 ? 通配符）
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();

    let mut p = 0;
    let mut t = 0;
    let mut star_p = None;
    let mut star_t = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star_p = Some(p);
            star_t = t;
            p += 1;
        } else if let Some(sp) = star_p {
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }

    p == pattern.len()
}

/// 并行处理文件列表
///
/// `jobs` 为 0 时使用全部 CPU 核心。
pub fn run_parallel<F>(files: Vec<PathBuf>, jobs: usize, processor: F) -> BatchResult
where
    F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
{
    let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
    let total = files.len();
    let pb = progress::create_progress_bar(total as u64, "Processing");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("rayon thread pool");

    let results: Vec<ProcessResult> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let result = processor(file);
                pb.inc(1);
                result
            })
            .collect()
    });

    pb.finish_and_clear();

    let mut batch_result = BatchResult::default();
    for result in results {
        batch_result.merge(result);
    }

    batch_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("CHGCAR*", "CHGCAR"));
        assert!(glob_match("CHGCAR*", "CHGCAR_CH4"));
        assert!(glob_match("LOCPOT*", "LOCPOT"));
        assert!(!glob_match("CHGCAR*", "OUTCAR"));
        assert!(glob_match("*.bin", "planedata-real.bin"));
        assert!(glob_match("PARCHG?", "PARCHG1"));
        assert!(!glob_match("PARCHG?", "PARCHG12"));
    }

    #[test]
    fn test_batch_result_merge() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a".to_string()));
        result.merge(ProcessResult::Skipped("b".to_string()));
        result.merge(ProcessResult::Failed("c".to_string(), "boom".to_string()));

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.summaries, vec!["a".to_string()]);
        assert_eq!(result.failures.len(), 1);
    }
}
