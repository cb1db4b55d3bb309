//! # 统一错误处理模块
//!
//! 定义 Gautility 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/record.rs` 的 `Quantity`

use crate::models::Quantity;
use thiserror::Error;

/// Gautility 统一错误类型
#[derive(Error, Debug)]
pub enum GautilityError {
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

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("No route section found")]
    NoRouteFound,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 提取错误
    // ─────────────────────────────────────────────────────────────
    #[error("Required value '{quantity}' not found in log")]
    MissingValue { quantity: Quantity },

    #[error("Cannot parse '{token}' as a number")]
    UnparseableToken { token: String },

    #[error("No supported method in route '{route}', electronic energy is undefined")]
    UnsupportedMethod { route: String },

    #[error("IRC requested but no SCF energies were found")]
    EmptyIrcProfile,

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' could not be started")]
    CommandNotFound {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plotting failed: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, GautilityError>;
