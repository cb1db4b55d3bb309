//! # 结果展示模块
//!
//! 终端输出、汇总表格、IRC 绘图与 CSV 导出。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `utils/`
//! - 子模块: console, plot, export

pub mod console;
pub mod export;
pub mod plot;

use crate::models::{JobDescriptor, Quantity, ResultRecord, Termination};

use serde::Serialize;
use tabled::Tabled;

/// 批量汇总中的一行
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub file: String,
    pub termination: Termination,
    pub route: String,
    pub energy: Option<f64>,
    pub enthalpy: Option<f64>,
    pub free_energy: Option<f64>,
    pub zpe: Option<f64>,
    pub eezpe: Option<f64>,
    pub imaginary: Option<usize>,
    pub irc_points: Option<usize>,
    pub error: Option<String>,
}

impl SummaryRow {
    /// 由成功提取的结果构造
    pub fn from_record(file: &str, job: &JobDescriptor, record: &ResultRecord) -> Self {
        SummaryRow {
            file: file.to_string(),
            termination: Termination::Normal,
            route: job.route().to_string(),
            energy: record.scalar(Quantity::Energy),
            enthalpy: record.scalar(Quantity::Enthalpy),
            free_energy: record.scalar(Quantity::FreeEnergy),
            zpe: record.scalar(Quantity::Zpe),
            eezpe: record.scalar(Quantity::Eezpe),
            imaginary: record.imaginary_count(),
            irc_points: record.series(Quantity::Irc).map(|p| p.len()),
            error: None,
        }
    }

    /// 失败文件
    pub fn failed(file: &str, termination: Termination, error: &str) -> Self {
        SummaryRow {
            file: file.to_string(),
            termination,
            route: String::new(),
            energy: None,
            enthalpy: None,
            free_energy: None,
            zpe: None,
            eezpe: None,
            imaginary: None,
            irc_points: None,
            error: Some(error.to_string()),
        }
    }
}

/// 终端汇总表格行
#[derive(Debug, Clone, Tabled)]
pub struct SummaryTableRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Energy (Ha)")]
    energy: String,
    #[tabled(rename = "G (Ha)")]
    free_energy: String,
    #[tabled(rename = "Imag.")]
    imaginary: String,
}

impl From<&SummaryRow> for SummaryTableRow {
    fn from(row: &SummaryRow) -> Self {
        let fmt = |v: Option<f64>| v.map(|x| format!("{:.6}", x)).unwrap_or_else(|| "-".into());
        SummaryTableRow {
            file: row.file.clone(),
            status: match &row.error {
                Some(_) => format!("{} (failed)", row.termination),
                None => row.termination.to_string(),
            },
            energy: fmt(row.energy),
            free_energy: fmt(row.free_energy),
            imaginary: row
                .imaginary
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuantityValue;

    #[test]
    fn test_summary_from_record() {
        let job = JobDescriptor::new("# opt freq am1");
        let mut record = ResultRecord::new();
        record.insert(Quantity::Energy, QuantityValue::Scalar(-0.02));
        record.insert(Quantity::Enthalpy, QuantityValue::NoValue);
        record.insert(
            Quantity::Frequencies,
            QuantityValue::Series(vec![-100.0, 200.0, 300.0]),
        );

        let row = SummaryRow::from_record("a_res.log", &job, &record);
        assert_eq!(row.energy, Some(-0.02));
        assert_eq!(row.enthalpy, None);
        assert_eq!(row.imaginary, Some(1));
        assert_eq!(row.irc_points, None);

        let table = SummaryTableRow::from(&row);
        assert_eq!(table.energy, "-0.020000");
        assert_eq!(table.free_energy, "-");
        assert_eq!(table.status, "Normal");
    }
}
