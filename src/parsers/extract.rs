//! # 物理量提取器
//!
//! 每个物理量一个独立的纯函数：扫描完整日志文本，取最后一次匹配。
//!
//! ## 缺失策略
//! - Enthalpy: 可选，缺失返回 `None`
//! - Energy / Free Energy / ZPE / EEZPE / Frequencies: 必需，缺失返回 `MissingValue`
//! - Energy 还要求 route 中含受支持方法，否则返回 `UnsupportedMethod`
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 使用
//! - 使用 `parsers/patterns.rs`, `parsers/frequency.rs`, `parsers/irc.rs`,
//!   `parsers/methods.rs`, `models/`

use crate::error::{GautilityError, Result};
use crate::models::{JobDescriptor, Quantity, QuantityValue, ResultRecord};
use crate::parsers::frequency::parse_frequency_tokens;
use crate::parsers::irc::reconstruct_profile;
use crate::parsers::methods::SupportedMethods;
use crate::parsers::patterns::{Pattern, PatternSet};

fn required(pattern: &Pattern, text: &str, quantity: Quantity) -> Result<f64> {
    pattern
        .last_value(text)?
        .ok_or(GautilityError::MissingValue { quantity })
}

/// 电子能量（最后一个 SCF 能量）
pub fn electronic_energy(
    patterns: &PatternSet,
    text: &str,
    job: &JobDescriptor,
    methods: &SupportedMethods,
) -> Result<f64> {
    if methods.find_in(job).is_none() {
        return Err(GautilityError::UnsupportedMethod {
            route: job.route().to_string(),
        });
    }
    required(&patterns.scf_energy, text, Quantity::Energy)
}

/// 焓，缺失时为 `None`
pub fn enthalpy(patterns: &PatternSet, text: &str) -> Result<Option<f64>> {
    patterns.enthalpy.last_value(text)
}

/// Gibbs 自由能
pub fn free_energy(patterns: &PatternSet, text: &str) -> Result<f64> {
    required(&patterns.free_energy, text, Quantity::FreeEnergy)
}

/// 零点能校正
pub fn zero_point_energy(patterns: &PatternSet, text: &str) -> Result<f64> {
    required(&patterns.zpe, text, Quantity::Zpe)
}

/// 电子能量 + 零点能
pub fn electronic_plus_zpe(patterns: &PatternSet, text: &str) -> Result<f64> {
    required(&patterns.eezpe, text, Quantity::Eezpe)
}

/// 全部振动频率 (cm^-1)，负值为虚频
pub fn frequencies(patterns: &PatternSet, text: &str) -> Result<Vec<f64>> {
    let lines = patterns.frequencies.captures(text);
    if lines.is_empty() {
        return Err(GautilityError::MissingValue {
            quantity: Quantity::Frequencies,
        });
    }

    let joined = lines.join(" ");
    let tokens: Vec<&str> = joined.split_whitespace().collect();
    parse_frequency_tokens(&tokens)
}

/// 按出现顺序的全部 SCF 能量
pub fn scf_energies(patterns: &PatternSet, text: &str) -> Result<Vec<f64>> {
    patterns.scf_energy.values(text)
}

/// IRC 能量曲线
pub fn irc_profile(patterns: &PatternSet, text: &str) -> Result<Vec<f64>> {
    reconstruct_profile(&scf_energies(patterns, text)?)
}

/// 根据 route 关键字组装结果
pub fn build_record(
    patterns: &PatternSet,
    text: &str,
    job: &JobDescriptor,
    methods: &SupportedMethods,
) -> Result<ResultRecord> {
    let mut record = ResultRecord::new();

    if job.is_optimization() {
        let energy = electronic_energy(patterns, text, job, methods)?;
        record.insert(Quantity::Energy, QuantityValue::Scalar(energy));
    }

    if job.is_optimization() || job.has_frequencies() {
        record.insert(Quantity::Enthalpy, enthalpy(patterns, text)?.into());
    }

    if job.has_frequencies() {
        record.insert(
            Quantity::FreeEnergy,
            QuantityValue::Scalar(free_energy(patterns, text)?),
        );
        record.insert(
            Quantity::Zpe,
            QuantityValue::Scalar(zero_point_energy(patterns, text)?),
        );
        record.insert(
            Quantity::Eezpe,
            QuantityValue::Scalar(electronic_plus_zpe(patterns, text)?),
        );
        record.insert(
            Quantity::Frequencies,
            QuantityValue::Series(frequencies(patterns, text)?),
        );
    }

    if job.is_irc() {
        record.insert(
            Quantity::Irc,
            QuantityValue::Series(irc_profile(patterns, text)?),
        );
    }

    Ok(record)
}
