//! # 统一错误处理模块
//!
//! 定义 Denutil 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Denutil 统一错误类型
#[derive(Error, Debug)]
pub enum DenutilError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 体数据解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Truncated header in {path}: file ended at line {line}")]
    TruncatedHeader { path: String, line: usize },

    #[error("Malformed integer '{token}' at line {line} of {path}")]
    MalformedInteger {
        path: String,
        line: usize,
        token: String,
    },

    #[error("Malformed float '{token}' at line {line} of {path}")]
    MalformedFloat {
        path: String,
        line: usize,
        token: String,
    },

    #[error("Incomplete grid in {path}: expected {expected} values, found {found}")]
    IncompleteGrid {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("Malformed header in {path}: {reason}")]
    MalformedHeader { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 二进制平面数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Truncated plane data in {path}: expected {expected} bytes, found {found}")]
    TruncatedPlane {
        path: String,
        expected: usize,
        found: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid vector format: {0} (expected 'x,y,z')")]
    InvalidVector(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DenutilError>;
