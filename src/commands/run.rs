//! # run 命令实现
//!
//! 依次运行 Gaussian 输入文件，随后分析输出并归档。
//!
//! ## 功能
//! - 收集目录中的 .gjf 输入文件
//! - 逐个调用 `$GAUSS_EXEDIR/g09 <input> <stem>_res`，显示耗时
//! - 复用 `LogAnalyzer` 分析全部输出
//! - 将 .log/.chk 移动到 `results_HH-MM-SS` 目录
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `commands/check.rs`, `parsers/route.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/timing.rs`

use crate::batch::FileCollector;
use crate::cli::run::RunArgs;
use crate::commands::check::{output_log_path, LogAnalyzer};
use crate::error::{GautilityError, Result};
use crate::parsers::route;
use crate::utils::timing::{clock_time, format_duration, results_folder_name};
use crate::utils::{output, progress};

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Running Gaussian Calculations");

    if !args.dir.is_dir() {
        return Err(GautilityError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let inputs = FileCollector::new(&args.dir)
        .with_pattern(&args.input_pattern)?
        .collect();
    if inputs.is_empty() {
        return Err(GautilityError::NoFilesFound {
            pattern: args.input_pattern.clone(),
        });
    }

    let executable = resolve_executable(args.gauss_exedir.as_deref(), &args.executable);
    output::print_info(&format!(
        "Running {} input files with '{}'",
        inputs.len(),
        executable.display()
    ));

    let analyzer = LogAnalyzer::new(&args.analysis)?;
    let total = inputs.len();

    for (i, input) in inputs.iter().enumerate() {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        println!(
            "\n{}",
            format!(
                "[{}] - Working on '{}' - {}/{}",
                clock_time(),
                name,
                i + 1,
                total
            )
            .green()
            .bold()
        );

        match route::classify_file(input, analyzer.patterns()) {
            Ok(job) => println!("{}", job),
            Err(e) => output::print_warning(&format!("{}: {}", name, e)),
        }

        if let Err(e) = run_gaussian(&executable, input, &output_stem(input, &args.suffix)) {
            output::print_error(&format!("{}: {}", name, e));
        }
    }

    let targets: Vec<PathBuf> = inputs
        .iter()
        .map(|input| output_log_path(input, &args.suffix))
        .collect();
    let report = analyzer.analyze_all(&targets);
    analyzer.finish(&report)?;

    if !args.no_archive {
        let (folder, moved) = archive_results(&args.dir, &results_folder_name())?;
        output::print_done(&format!(
            "Moved {} result files to '{}'",
            moved,
            folder.display()
        ));
    }

    Ok(())
}

/// Gaussian 可执行文件路径：有 GAUSS_EXEDIR 时拼接，否则从 PATH 查找
pub fn resolve_executable(exe_dir: Option<&Path>, name: &str) -> PathBuf {
    match exe_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// 输出文件主干：`dir/<stem><suffix>`（Gaussian 会补上 .log）
fn output_stem(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{}", stem, suffix))
}

/// 运行单个 Gaussian 作业并等待结束
fn run_gaussian(executable: &Path, input: &Path, output: &Path) -> Result<()> {
    let command = executable.display().to_string();
    let spinner = progress::create_spinner(&format!("Running {}", input.display()));
    let started = Instant::now();

    let status = Command::new(executable).arg(input).arg(output).status();
    spinner.finish_and_clear();

    let status = status.map_err(|e| GautilityError::CommandNotFound {
        command: command.clone(),
        source: e,
    })?;

    let elapsed = format_duration(started.elapsed());
    if status.success() {
        println!("Done - Elapsed time {}.", elapsed);
        Ok(())
    } else {
        Err(GautilityError::CommandFailed {
            command,
            stderr: format!("exited with {} after {}", status, elapsed),
        })
    }
}

/// 将目录中的 .log/.chk 移动到新建的归档目录
pub fn archive_results(dir: &Path, folder_name: &str) -> Result<(PathBuf, usize)> {
    let folder = dir.join(folder_name);
    fs::create_dir_all(&folder).map_err(|e| GautilityError::FileWriteError {
        path: folder.display().to_string(),
        source: e,
    })?;

    let files = FileCollector::new(dir).with_pattern("*.log,*.chk")?.collect();
    for file in &files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = folder.join(name);
        fs::rename(file, &target).map_err(|e| GautilityError::FileWriteError {
            path: target.display().to_string(),
            source: e,
        })?;
    }

    Ok((folder, files.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_executable() {
        assert_eq!(
            resolve_executable(Some(Path::new("/opt/g09")), "g09"),
            PathBuf::from("/opt/g09/g09")
        );
        assert_eq!(resolve_executable(None, "g16"), PathBuf::from("g16"));
    }

    #[test]
    fn test_output_stem() {
        assert_eq!(
            output_stem(Path::new("jobs/ts.gjf"), "_res"),
            PathBuf::from("jobs/ts_res")
        );
    }

    #[test]
    fn test_archive_results() {
        let dir = std::env::temp_dir().join("gautility-run-archive");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for name in ["a_res.log", "a.chk", "b_res.log", "a.gjf"] {
            fs::write(dir.join(name), "x").unwrap();
        }

        let (folder, moved) = archive_results(&dir, "results_12-00-00").unwrap();
        assert_eq!(moved, 3);
        assert!(folder.join("a_res.log").exists());
        assert!(folder.join("a.chk").exists());
        assert!(!dir.join("b_res.log").exists());
        assert!(dir.join("a.gjf").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_executable_is_reported() {
        let err = run_gaussian(
            Path::new("/nonexistent/gautility-g09"),
            Path::new("a.gjf"),
            Path::new("a_res"),
        )
        .unwrap_err();
        assert!(matches!(err, GautilityError::CommandNotFound { .. }));
    }
}
