//! # 计算任务描述
//!
//! `JobDescriptor` 保存归一化后的 route 行（如 `p opt freq b3lyp/6-31g(d)`），
//! 并据此判断需要提取哪些物理量。
//!
//! ## 依赖关系
//! - 被 `parsers/route.rs` 构造
//! - 被 `parsers/extract.rs`, `report/` 使用

use serde::Serialize;
use std::fmt;

/// 归一化的 route 描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDescriptor {
    route: String,
}

impl JobDescriptor {
    /// 从原始 route 文本构造（自动归一化）
    pub fn new(raw: &str) -> Self {
        JobDescriptor {
            route: normalize_route(raw),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// route 中是否包含关键字（不区分大小写的子串匹配）
    pub fn requests(&self, keyword: &str) -> bool {
        self.route
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// 几何优化
    pub fn is_optimization(&self) -> bool {
        self.requests("opt")
    }

    /// 频率计算
    pub fn has_frequencies(&self) -> bool {
        self.requests("freq")
    }

    /// 内禀反应坐标
    pub fn is_irc(&self) -> bool {
        self.requests("irc")
    }
}

impl fmt::Display for JobDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route)
    }
}

/// 去掉 `#` 标记、合并连续空白、去掉首尾的分隔线残留
///
/// 幂等：对结果再次归一化不会改变它。
pub fn normalize_route(raw: &str) -> String {
    let collapsed = raw
        .replace('#', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    collapsed
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(
            normalize_route("  #p   opt  freq\tb3lyp/6-31g(d)  "),
            "p opt freq b3lyp/6-31g(d)"
        );
        assert_eq!(normalize_route("---- # opt am1 ----"), "opt am1");
    }

    #[test]
    fn test_normalize_idempotent() {
        let raws = [
            "#p opt freq b3lyp/6-31g(d) geom=connectivity",
            "  # irc=(calcfc,maxpoints=20)   b3lyp/6-31+g(d,p) --",
            "--#T  AM1  opt",
        ];
        for raw in raws {
            let once = normalize_route(raw);
            assert_eq!(normalize_route(&once), once);
        }
    }

    #[test]
    fn test_keyword_checks_ignore_case() {
        let job = JobDescriptor::new("#P OPT=(CalcFC,TS) FREQ B3LYP/6-31G(d)");
        assert!(job.is_optimization());
        assert!(job.has_frequencies());
        assert!(!job.is_irc());

        let irc = JobDescriptor::new("# IRC=(maxpoints=10) am1");
        assert!(irc.is_irc());
        assert!(!irc.is_optimization());
    }
}
