//! # run 子命令 CLI 定义
//!
//! 依次运行 Gaussian 输入文件，分析输出并归档结果。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::check::AnalysisArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory containing the input decks
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern(s) for input decks (comma-separated)
    #[arg(long, default_value = "*.gjf,*.com")]
    pub input_pattern: String,

    /// Directory containing the Gaussian executables
    #[arg(long, env = "GAUSS_EXEDIR")]
    pub gauss_exedir: Option<PathBuf>,

    /// Gaussian executable name
    #[arg(long, default_value = "g09")]
    pub executable: String,

    /// Suffix appended to an input deck's stem to name its output
    #[arg(long, default_value = "_res")]
    pub suffix: String,

    /// Keep .log/.chk files in place instead of moving them to results_HH-MM-SS
    #[arg(long, default_value_t = false)]
    pub no_archive: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}
