//! # 工具函数模块
//!
//! 提供美化输出、进度条、单位换算和时间格式化等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `report/` 模块使用
//! - 子模块: output, progress, timing, units

pub mod output;
pub mod progress;
pub mod timing;
pub mod units;
