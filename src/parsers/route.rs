//! # 计算类型识别
//!
//! 从输入文件 (.gjf/.com) 的 route 行或日志 (.log/.out) 中回显的 route 块
//! 提取计算关键字，生成 `JobDescriptor`。
//!
//! ## 日志中的 route 块
//! ```text
//!  ----------------------------------------------------------------------
//!  #p opt=(calcfc,ts,noeigen) freq b3lyp/6-31g(d) scrf=(smd,solvent=wat
//!  er) geom=connectivity
//!  ----------------------------------------------------------------------
//! ```
//! Gaussian 在固定宽度处折行，续行以一个空格开头，需要去掉该空格后直接拼接。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/patterns.rs`, `models/job.rs`

use crate::error::{GautilityError, Result};
use crate::models::JobDescriptor;
use crate::parsers::patterns::PatternSet;
use std::fs;
use std::path::Path;

/// 从输入文件内容提取 route
///
/// 取第一个含 `#` 的行；其后直到空行为止的非空行属于同一 route 段。
pub fn route_from_input(content: &str) -> Result<JobDescriptor> {
    let mut lines = content.lines().skip_while(|line| !line.contains('#'));

    let first = lines.next().ok_or(GautilityError::NoRouteFound)?;
    let mut route = first.to_string();

    for line in lines.take_while(|line| !line.trim().is_empty()) {
        route.push(' ');
        route.push_str(line);
    }

    Ok(JobDescriptor::new(&route))
}

/// 从日志文本提取回显的 route 块
pub fn route_from_log(patterns: &PatternSet, text: &str) -> Result<JobDescriptor> {
    let caps = patterns
        .route
        .regex()
        .captures(text)
        .ok_or(GautilityError::NoRouteFound)?;

    let mut route = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();

    // 续行：去掉行首的一个空格后直接拼接
    if let Some(rest) = caps.get(2) {
        for line in rest.as_str().lines() {
            let line = line.trim_end_matches('\r');
            route.push_str(line.strip_prefix(' ').unwrap_or(line));
        }
    }

    Ok(JobDescriptor::new(&route))
}

/// 根据扩展名判断文件类型并提取 route
pub fn classify_file(path: &Path, patterns: &PatternSet) -> Result<JobDescriptor> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path).map_err(|e| GautilityError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    match ext.as_str() {
        "gjf" | "com" => route_from_input(&content),
        "log" | "out" => route_from_log(patterns, &content),
        _ => Err(GautilityError::UnsupportedFormat(format!(
            "Cannot determine calculation type for: {}",
            path.display()
        ))),
    }
}
