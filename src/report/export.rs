//! # 汇总结果导出
//!
//! 将批量分析的汇总行写入 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `report/mod.rs` 的 `SummaryRow`
//! - 使用 `csv` + `serde`

use crate::error::{GautilityError, Result};
use crate::report::SummaryRow;

use std::path::Path;

/// 写出汇总 CSV
pub fn save_summary_csv(rows: &[SummaryRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| GautilityError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
