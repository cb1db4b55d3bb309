//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 运行 Gaussian 作业并分析、归档
//! - `check`: 检查日志并提取结果
//! - `formchk`: 批量转换检查点文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, check, formchk

pub mod check;
pub mod formchk;
pub mod run;

use clap::{Parser, Subcommand};

/// Gautility - Gaussian 计算批处理与结果分析工具
#[derive(Parser)]
#[command(name = "gautility")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch runner and log analyzer for Gaussian calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run every input deck with Gaussian, then analyze and archive the results
    Run(run::RunArgs),

    /// Check termination and extract energies, frequencies and IRC profiles from logs
    Check(check::CheckArgs),

    /// Convert checkpoint files (.chk) to formatted checkpoints (.fchk)
    Formchk(formchk::FormchkArgs),
}
