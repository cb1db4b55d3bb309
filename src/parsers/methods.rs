//! # 受支持的计算方法
//!
//! 对这些方法，`SCF Done` 行给出的就是电子能量。
//! route 中找不到任何受支持方法时，能量提取会显式报错而不是返回未定义值。
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs`, `commands/check.rs` 使用

use crate::models::JobDescriptor;

/// 默认方法关键字（DFT 泛函与半经验方法）
const DEFAULT_METHODS: &[&str] = &[
    "b3lyp", "cam-b3lyp", "b3pw91", "m062x", "m06", "wb97xd", "pbe1pbe", "pbepbe", "bp86",
    "tpssh", "am1", "pm3", "pm6", "pm7",
];

/// 受支持方法集合
#[derive(Debug, Clone)]
pub struct SupportedMethods {
    keywords: Vec<String>,
}

impl Default for SupportedMethods {
    fn default() -> Self {
        SupportedMethods {
            keywords: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl SupportedMethods {
    /// 追加额外关键字（逗号分隔，忽略空项与重复项）
    pub fn with_extra(mut self, extra: &str) -> Self {
        for method in extra.split(',').map(|m| m.trim().to_lowercase()) {
            if !method.is_empty() && !self.keywords.contains(&method) {
                self.keywords.push(method);
            }
        }
        self
    }

    /// route 中第一个出现的受支持方法
    pub fn find_in(&self, job: &JobDescriptor) -> Option<&str> {
        self.keywords
            .iter()
            .find(|m| job.requests(m))
            .map(|m| m.as_str())
    }
}
