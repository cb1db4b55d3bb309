//! # check 子命令 CLI 定义
//!
//! 检查 Gaussian 日志的终止状态并提取结果。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/run.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;
use std::path::PathBuf;

/// 日志分析参数（check 与 run 共用）
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Extra method keywords whose SCF energy is the electronic energy (comma-separated)
    #[arg(long, env = "GAUTILITY_METHODS", default_value = "")]
    pub methods: String,

    /// Skip IRC profile plots
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Write a summary CSV of all analyzed logs
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing the calculations
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern(s) for input decks (comma-separated)
    #[arg(long, default_value = "*.gjf,*.com")]
    pub input_pattern: String,

    /// Glob pattern(s) for log files (comma-separated)
    #[arg(long, default_value = "*.log,*.out")]
    pub log_pattern: String,

    /// Suffix appended to an input deck's stem to name its log
    #[arg(long, default_value = "_res")]
    pub suffix: String,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}
