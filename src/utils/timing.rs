//! # 时间工具
//!
//! 作业耗时格式化与时间戳（结果目录名、进度提示）。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `chrono` 获取本地时间

use chrono::Local;
use std::time::Duration;

/// 格式化耗时，例如 `1 h 5 min 12 s`，省略为零的单位
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let parts: Vec<String> = [(hours, "h"), (minutes, "min"), (seconds, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{} {}", value, unit))
        .collect();

    if parts.is_empty() {
        "0 s".to_string()
    } else {
        parts.join(" ")
    }
}

/// 当前本地时间 `HH:MM:SS`
pub fn clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// 结果归档目录名 `results_HH-MM-SS`
pub fn results_folder_name() -> String {
    format!("results_{}", Local::now().format("%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0 s");
        assert_eq!(format_duration(Duration::from_secs(42)), "42 s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1 h");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1 h 2 min 5 s");
        assert_eq!(format_duration(Duration::from_millis(61_900)), "1 min 1 s");
    }

    #[test]
    fn test_results_folder_name() {
        let name = results_folder_name();
        assert!(name.starts_with("results_"));
        assert_eq!(name.len(), "results_HH-MM-SS".len());
    }
}
