//! # 终止状态判断
//!
//! 统计 `Normal termination of Gaussian` 出现次数，零次即为异常终止。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 使用
//! - 使用 `parsers/patterns.rs`, `models::Termination`

use crate::models::Termination;
use crate::parsers::patterns::PatternSet;

/// 成功标志出现次数
pub fn banner_count(patterns: &PatternSet, text: &str) -> usize {
    patterns.termination.count(text)
}

/// 判断日志的终止状态
pub fn check_termination(patterns: &PatternSet, text: &str) -> Termination {
    Termination::from_banner_count(banner_count(patterns, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_termination() {
        let patterns = PatternSet::gaussian().unwrap();
        let text = " Job cpu time: 0 days 0 hours 1 minutes\n Normal termination of Gaussian 09 at Mon Jan  1 12:00:00 2024.\n";
        assert_eq!(banner_count(&patterns, text), 1);
        assert_eq!(check_termination(&patterns, text), Termination::Normal);
    }

    #[test]
    fn test_linked_job_termination() {
        let patterns = PatternSet::gaussian().unwrap();
        let text = " Normal termination of Gaussian 16 at A.\n Link1:  Proceeding\n Normal termination of Gaussian 16 at B.\n";
        assert_eq!(banner_count(&patterns, text), 2);
        assert_eq!(check_termination(&patterns, text), Termination::Normal);
    }

    #[test]
    fn test_error_termination() {
        let patterns = PatternSet::gaussian().unwrap();
        let text = " Error termination via Lnk1e in /opt/g09/l9999.exe\n";
        assert_eq!(banner_count(&patterns, text), 0);
        assert_eq!(check_termination(&patterns, text), Termination::Error);
    }
}
