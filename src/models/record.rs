//! # 计算结果数据模型
//!
//! `ResultRecord` 是单个日志文件提取结果的有序映射。
//! 键集合由 route 关键字决定：
//! - `opt`  → Energy, Enthalpy
//! - `freq` → Enthalpy, Free Energy, ZPE, EEZPE, Frequencies
//! - `irc`  → IRC
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs` 构造
//! - 被 `report/`, `commands/` 使用

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 可提取的物理量
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Quantity {
    Energy,
    Enthalpy,
    FreeEnergy,
    Zpe,
    Eezpe,
    Frequencies,
    Irc,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Energy => "Energy",
            Quantity::Enthalpy => "Enthalpy",
            Quantity::FreeEnergy => "Free Energy",
            Quantity::Zpe => "ZPE",
            Quantity::Eezpe => "EEZPE",
            Quantity::Frequencies => "Frequencies",
            Quantity::Irc => "IRC",
        };
        write!(f, "{}", name)
    }
}

/// 提取值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuantityValue {
    /// 单个数值 (Hartree 或 hartree/particle)
    Scalar(f64),
    /// 可选量缺失
    NoValue,
    /// 有序数列（频率、IRC 能量）
    Series(Vec<f64>),
}

impl QuantityValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            QuantityValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            QuantityValue::Series(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Option<f64>> for QuantityValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(QuantityValue::NoValue, QuantityValue::Scalar)
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityValue::Scalar(v) => write!(f, "{}", v),
            QuantityValue::NoValue => write!(f, "None"),
            QuantityValue::Series(v) => write!(f, "[{} values]", v.len()),
        }
    }
}

/// 单个日志的提取结果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultRecord {
    entries: BTreeMap<Quantity, QuantityValue>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, quantity: Quantity, value: QuantityValue) {
        self.entries.insert(quantity, value);
    }

    pub fn get(&self, quantity: Quantity) -> Option<&QuantityValue> {
        self.entries.get(&quantity)
    }

    pub fn contains(&self, quantity: Quantity) -> bool {
        self.entries.contains_key(&quantity)
    }

    /// 按固定顺序返回已有的键
    pub fn quantities(&self) -> Vec<Quantity> {
        self.entries.keys().copied().collect()
    }

    pub fn scalar(&self, quantity: Quantity) -> Option<f64> {
        self.get(quantity).and_then(QuantityValue::as_scalar)
    }

    pub fn series(&self, quantity: Quantity) -> Option<&[f64]> {
        self.get(quantity).and_then(QuantityValue::as_series)
    }

    /// 虚频数目（无频率数据时为 None）
    pub fn imaginary_count(&self) -> Option<usize> {
        self.series(Quantity::Frequencies)
            .map(|freqs| freqs.iter().filter(|f| **f < 0.0).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantities_are_ordered() {
        let mut record = ResultRecord::new();
        record.insert(Quantity::Irc, QuantityValue::Series(vec![1.0]));
        record.insert(Quantity::Enthalpy, QuantityValue::NoValue);
        record.insert(Quantity::Energy, QuantityValue::Scalar(-1.0));

        assert_eq!(
            record.quantities(),
            vec![Quantity::Energy, Quantity::Enthalpy, Quantity::Irc]
        );
    }

    #[test]
    fn test_optional_into_value() {
        assert_eq!(QuantityValue::from(None), QuantityValue::NoValue);
        assert_eq!(
            QuantityValue::from(Some(-0.5)),
            QuantityValue::Scalar(-0.5)
        );
        assert_eq!(QuantityValue::NoValue.to_string(), "None");
    }

    #[test]
    fn test_imaginary_count() {
        let mut record = ResultRecord::new();
        assert_eq!(record.imaginary_count(), None);

        record.insert(
            Quantity::Frequencies,
            QuantityValue::Series(vec![-512.3, 100.0, 250.1]),
        );
        assert_eq!(record.imaginary_count(), Some(1));
    }

    #[test]
    fn test_quantity_display_names() {
        assert_eq!(Quantity::FreeEnergy.to_string(), "Free Energy");
        assert_eq!(Quantity::Eezpe.to_string(), "EEZPE");
        assert_eq!(Quantity::Irc.to_string(), "IRC");
    }
}
