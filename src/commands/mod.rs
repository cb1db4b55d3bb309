//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `report/`, `batch/`, `utils/`
//! - 子模块: run, check, formchk

pub mod check;
pub mod formchk;
pub mod run;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Formchk(args) => formchk::execute(args),
    }
}
