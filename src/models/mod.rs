//! # 数据模型模块
//!
//! 定义计算任务描述、终止状态与提取结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `report/` 和 `commands/` 使用
//! - 子模块: job, record

pub mod job;
pub mod record;

pub use job::JobDescriptor;
pub use record::{Quantity, QuantityValue, ResultRecord};

use serde::Serialize;
use std::fmt;

/// 计算终止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    Normal,
    Error,
}

impl Termination {
    /// 根据成功标志出现次数判断
    pub fn from_banner_count(count: usize) -> Self {
        if count > 0 {
            Termination::Normal
        } else {
            Termination::Error
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Normal => write!(f, "Normal"),
            Termination::Error => write!(f, "Error"),
        }
    }
}
