//! # check 命令实现
//!
//! 检查 Gaussian 日志并提取计算结果。
//!
//! ## 功能
//! - 有输入文件时分析对应的 `<stem>_res.log`，否则分析目录中全部日志
//! - 按文件顺序依次判断终止状态、识别计算类型、提取物理量并输出
//! - 单个文件失败不影响其余文件，最后汇总失败列表
//! - 可选 IRC 曲线绘图与汇总 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `parsers/`, `report/`, `batch/`
//! - 被 `commands/run.rs` 复用（`LogAnalyzer`）

use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::check::{AnalysisArgs, CheckArgs};
use crate::error::{GautilityError, Result};
use crate::models::{JobDescriptor, Quantity, ResultRecord, Termination};
use crate::parsers::{extract, route, termination, PatternSet, SupportedMethods};
use crate::report::{console, export, plot, SummaryRow, SummaryTableRow};
use crate::utils::output;

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::Table;

/// 路径不存在时的错误：带扩展名视为日志文件，否则视为目录
fn missing_path_error(path: &Path) -> GautilityError {
    let path_str = path.display().to_string();
    if path.extension().is_some() {
        GautilityError::FileNotFound { path: path_str }
    } else {
        GautilityError::DirectoryNotFound { path: path_str }
    }
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Checking Gaussian Results");

    if !args.dir.exists() {
        return Err(missing_path_error(&args.dir));
    }

    let targets = if args.dir.is_file() {
        vec![args.dir.clone()]
    } else {
        let logs = FileCollector::new(&args.dir)
            .with_pattern(&args.log_pattern)?
            .collect();
        if logs.is_empty() {
            return Err(GautilityError::NoFilesFound {
                pattern: args.log_pattern.clone(),
            });
        }

        let inputs = FileCollector::new(&args.dir)
            .with_pattern(&args.input_pattern)?
            .collect();
        if inputs.is_empty() {
            logs
        } else {
            inputs
                .iter()
                .map(|input| output_log_path(input, &args.suffix))
                .collect()
        }
    };

    output::print_info(&format!("Analyzing {} log files", targets.len()));

    let analyzer = LogAnalyzer::new(&args.analysis)?;
    let report = analyzer.analyze_all(&targets);
    analyzer.finish(&report)
}

/// 输入文件对应的日志路径：`dir/<stem><suffix>.log`
pub fn output_log_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}{}.log", stem, suffix))
}

/// 单个日志的分析结果
#[derive(Debug, Clone)]
pub enum LogReport {
    /// 未找到正常终止标志，跳过提取
    Abnormal,
    /// 正常终止且提取成功
    Complete {
        job: JobDescriptor,
        record: ResultRecord,
    },
}

/// 批量分析结果
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub batch: BatchResult,
    pub rows: Vec<SummaryRow>,
}

/// 日志分析器：持有一次构造的模式库与方法集合
pub struct LogAnalyzer {
    patterns: PatternSet,
    methods: SupportedMethods,
    plot: bool,
    output_csv: Option<PathBuf>,
}

impl LogAnalyzer {
    pub fn new(args: &AnalysisArgs) -> Result<Self> {
        Ok(LogAnalyzer {
            patterns: PatternSet::gaussian()?,
            methods: SupportedMethods::default().with_extra(&args.methods),
            plot: !args.no_plot,
            output_csv: args.output_csv.clone(),
        })
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// 分析日志文本
    pub fn analyze_text(&self, text: &str) -> Result<LogReport> {
        if termination::check_termination(&self.patterns, text) == Termination::Error {
            return Ok(LogReport::Abnormal);
        }

        let job = route::route_from_log(&self.patterns, text)?;
        let record = extract::build_record(&self.patterns, text, &job, &self.methods)?;
        Ok(LogReport::Complete { job, record })
    }

    /// 读取并分析单个日志文件
    pub fn analyze_log(&self, path: &Path) -> Result<LogReport> {
        let text = fs::read_to_string(path).map_err(|e| GautilityError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        self.analyze_text(&text)
    }

    /// 依次分析所有日志，打印每个文件的结果
    pub fn analyze_all(&self, files: &[PathBuf]) -> AnalysisReport {
        let mut rows = Vec::with_capacity(files.len());

        let batch = BatchRunner::new(1).run_sequential(files, |path| {
            let (result, row) = self.process_log(path);
            rows.push(row);
            result
        });

        AnalysisReport { batch, rows }
    }

    fn process_log(&self, path: &Path) -> (ProcessResult, SummaryRow) {
        let name = display_name(path);

        match self.analyze_log(path) {
            Ok(LogReport::Complete { job, record }) => {
                console::print_record(&name, &job, &record);
                if self.plot {
                    self.plot_irc(path, &record);
                }
                let row = SummaryRow::from_record(&name, &job, &record);
                (ProcessResult::Success(name), row)
            }
            Ok(LogReport::Abnormal) => {
                let reason = "terminated with errors";
                println!(
                    "\n{}",
                    format!(" - [!] Calculation '{}' terminated with ERRORS.", name)
                        .red()
                        .bold()
                );
                let row = SummaryRow::failed(&name, Termination::Error, reason);
                (ProcessResult::Failed(name, reason.to_string()), row)
            }
            Err(e) => {
                let termination = match &e {
                    GautilityError::FileReadError { .. } => Termination::Error,
                    _ => Termination::Normal,
                };
                let reason = e.to_string();
                output::print_error(&format!("{}: {}", name, reason));
                let row = SummaryRow::failed(&name, termination, &reason);
                (ProcessResult::Failed(name, reason), row)
            }
        }
    }

    fn plot_irc(&self, path: &Path, record: &ResultRecord) {
        let Some(profile) = record.series(Quantity::Irc) else {
            return;
        };

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("irc");
        let plot_path = path.with_file_name(format!("{}_irc.png", stem));
        let title = format!("IRC profile: {}", stem);

        match plot::generate_irc_plot(profile, &plot_path, &title) {
            Ok(()) => output::print_success(&format!(
                "IRC profile saved to '{}'",
                plot_path.display()
            )),
            Err(e) => output::print_warning(&format!("Could not plot IRC profile: {}", e)),
        }
    }

    /// 打印全局汇总，可选写出 CSV
    pub fn finish(&self, report: &AnalysisReport) -> Result<()> {
        println!("\n{}", "Global Results:".green().bold());

        let batch = &report.batch;
        if batch.failures.is_empty() {
            println!("\n     {}\n", "[✓] - No errors found!".yellow().bold());
        } else {
            println!(
                "\n    {}",
                format!(
                    "[!] - Error on {}/{} calculations.",
                    batch.failed,
                    batch.total()
                )
                .red()
                .bold()
            );
            for (file, reason) in &batch.failures {
                println!("      · {} ({})", file, reason);
            }
            println!();
        }

        if !report.rows.is_empty() {
            let table_rows: Vec<SummaryTableRow> =
                report.rows.iter().map(SummaryTableRow::from).collect();
            println!("{}", Table::new(&table_rows));
        }

        if let Some(ref csv_path) = self.output_csv {
            export::save_summary_csv(&report.rows, csv_path)?;
            output::print_success(&format!("Summary saved to '{}'", csv_path.display()));
        }

        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_LOG: &str = r#"
 ------------------------------
 #p opt freq am1
 ------------------------------
 SCF Done:  E(RAM1) =  -0.0231574     A.U. after   10 cycles
 Frequencies --   -35.1000               120.2000               300.3000
 Zero-point correction=                           0.021010 (Hartree/Particle)
 Sum of electronic and zero-point Energies=             -0.002147
 Sum of electronic and thermal Free Energies=           -0.030000
 Normal termination of Gaussian 09 at Mon Jan  1 12:00:00 2024.
"#;

    fn analyzer() -> LogAnalyzer {
        LogAnalyzer::new(&AnalysisArgs {
            methods: String::new(),
            no_plot: true,
            output_csv: None,
        })
        .unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gautility-check-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_path_error() {
        assert!(matches!(
            missing_path_error(Path::new("calc/missing.log")),
            GautilityError::FileNotFound { .. }
        ));
        assert!(matches!(
            missing_path_error(Path::new("calc")),
            GautilityError::DirectoryNotFound { .. }
        ));
    }

    #[test]
    fn test_output_log_path() {
        assert_eq!(
            output_log_path(Path::new("calc/water.gjf"), "_res"),
            PathBuf::from("calc/water_res.log")
        );
    }

    #[test]
    fn test_analyze_text_complete() {
        match analyzer().analyze_text(GOOD_LOG).unwrap() {
            LogReport::Complete { job, record } => {
                assert_eq!(job.route(), "p opt freq am1");
                assert_eq!(record.scalar(Quantity::Energy), Some(-0.0231574));
                assert_eq!(record.scalar(Quantity::Enthalpy), None);
                assert_eq!(record.imaginary_count(), Some(1));
            }
            LogReport::Abnormal => panic!("expected a complete report"),
        }
    }

    #[test]
    fn test_abnormal_termination_skips_extraction() {
        let text = GOOD_LOG.replace("Normal termination", "Error termination");
        assert!(matches!(
            analyzer().analyze_text(&text).unwrap(),
            LogReport::Abnormal
        ));
    }

    #[test]
    fn test_batch_continues_after_failures() {
        let dir = scratch_dir("batch");
        let good = dir.join("good_res.log");
        let broken = dir.join("broken_res.log");
        let no_route = dir.join("noroute_res.log");
        let missing = dir.join("missing_res.log");
        fs::write(&good, GOOD_LOG).unwrap();
        fs::write(&broken, " Error termination via Lnk1e\n").unwrap();
        fs::write(&no_route, " Normal termination of Gaussian 09\n").unwrap();

        let report = analyzer().analyze_all(&[
            broken.clone(),
            good.clone(),
            no_route.clone(),
            missing.clone(),
        ]);

        assert_eq!(report.batch.total(), 4);
        assert_eq!(report.batch.success, 1);
        assert_eq!(report.batch.successes, vec!["good_res.log".to_string()]);
        let failed: Vec<_> = report.batch.failures.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(
            failed,
            vec!["broken_res.log", "noroute_res.log", "missing_res.log"]
        );
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[1].energy, Some(-0.0231574));
        assert_eq!(report.rows[2].termination, Termination::Normal);
        assert_eq!(report.rows[3].termination, Termination::Error);

        fs::remove_dir_all(&dir).unwrap();
    }
}
