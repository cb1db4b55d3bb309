//! # Gautility - Gaussian 计算批处理与结果分析工具
//!
//! 将零散的 Gaussian 辅助脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `run`     - 依次运行目录中的 .gjf 输入文件并归档结果
//! - `check`   - 检查 .log 输出的终止状态并提取能量、频率、IRC 等
//! - `formchk` - 批量将 .chk 转换为 .fchk
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (日志解析与计算类型识别)
//!   │     ├── report/    (结果展示、绘图、导出)
//!   │     ├── batch/     (文件收集与批量执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
