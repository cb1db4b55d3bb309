//! # 解析器模块
//!
//! Gaussian 输入与日志的解析：模式库、计算类型识别、物理量提取、
//! 频率修复、IRC 曲线重建与终止状态判断。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: patterns, route, methods, extract, frequency, irc, termination

pub mod extract;
pub mod frequency;
pub mod irc;
pub mod methods;
pub mod patterns;
pub mod route;
pub mod termination;

pub use methods::SupportedMethods;
pub use patterns::PatternSet;
