//! # formchk 子命令 CLI 定义
//!
//! 批量将 .chk 检查点文件转换为 .fchk
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/formchk.rs`

use clap::Args;
use std::path::PathBuf;

/// formchk 子命令参数
#[derive(Args, Debug)]
pub struct FormchkArgs {
    /// Directory containing the checkpoint files
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Glob pattern(s) for checkpoint files (comma-separated)
    #[arg(long, default_value = "*.chk")]
    pub pattern: String,

    /// Directory containing the Gaussian executables
    #[arg(long, env = "GAUSS_EXEDIR")]
    pub gauss_exedir: Option<PathBuf>,

    /// formchk executable name
    #[arg(long, default_value = "formchk")]
    pub executable: String,

    /// Number of parallel conversions (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing .fchk files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
