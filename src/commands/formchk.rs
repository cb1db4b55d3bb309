//! # formchk 命令实现
//!
//! 批量将 Gaussian 检查点文件 (.chk) 转换为格式化检查点 (.fchk)。
//!
//! ## 功能
//! - 收集目录中的 .chk 文件
//! - 并行调用 `formchk`（rayon）
//! - 已存在的 .fchk 默认跳过
//!
//! ## 依赖关系
//! - 使用 `cli/formchk.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `commands/run.rs` 的可执行文件定位

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::formchk::FormchkArgs;
use crate::commands::run::resolve_executable;
use crate::error::{GautilityError, Result};
use crate::utils::output;

use std::path::{Path, PathBuf};
use std::process::Command;

/// 执行 formchk 命令
pub fn execute(args: FormchkArgs) -> Result<()> {
    output::print_header("Formatting Checkpoint Files");

    if !args.dir.exists() {
        return Err(GautilityError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let files = FileCollector::new(&args.dir)
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();
    if files.is_empty() {
        return Err(GautilityError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info("Converting the following '.chk' files into '.fchk':");
    for file in &files {
        println!("      · {}", file.display());
    }

    let executable = resolve_executable(args.gauss_exedir.as_deref(), &args.executable);
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&files, |chk| {
        convert_checkpoint(&executable, chk, args.overwrite)
    })?;

    output::print_separator();
    output::print_done(&format!(
        "Converted {}, skipped {}, failed {} of {} files",
        result.success,
        result.skipped,
        result.failed,
        result.total()
    ));

    for (file, reason) in &result.failures {
        output::print_error(&format!("{}: {}", file, reason));
    }

    Ok(())
}

/// 转换单个检查点文件
fn convert_checkpoint(executable: &Path, chk: &Path, overwrite: bool) -> ProcessResult {
    let name = chk.display().to_string();
    let fchk = fchk_path(chk);

    if fchk.exists() && !overwrite {
        return ProcessResult::Skipped(name);
    }

    match Command::new(executable).arg(chk).arg(&fchk).output() {
        Ok(out) if out.status.success() => ProcessResult::Success(name),
        Ok(out) => {
            let err = GautilityError::CommandFailed {
                command: executable.display().to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            };
            ProcessResult::Failed(name, err.to_string())
        }
        Err(e) => {
            let err = GautilityError::CommandNotFound {
                command: executable.display().to_string(),
                source: e,
            };
            ProcessResult::Failed(name, err.to_string())
        }
    }
}

fn fchk_path(chk: &Path) -> PathBuf {
    chk.with_extension("fchk")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_fchk_path() {
        assert_eq!(
            fchk_path(Path::new("calc/water.chk")),
            PathBuf::from("calc/water.fchk")
        );
    }

    #[test]
    fn test_existing_fchk_is_skipped() {
        let dir = std::env::temp_dir().join("gautility-formchk-skip");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let chk = dir.join("water.chk");
        fs::write(&chk, "").unwrap();
        fs::write(dir.join("water.fchk"), "").unwrap();

        let result = convert_checkpoint(Path::new("/nonexistent/formchk"), &chk, false);
        assert!(matches!(result, ProcessResult::Skipped(_)));

        let result = convert_checkpoint(Path::new("/nonexistent/formchk"), &chk, true);
        assert!(matches!(result, ProcessResult::Failed(_, _)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
