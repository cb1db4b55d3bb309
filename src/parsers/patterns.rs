//! # Gaussian 输出模式库
//!
//! 一次构造、只读共享的正则表达式集合，每个模式带有名称。
//! 所有提取器都以 `&PatternSet` 作为参数，不使用全局状态。
//!
//! ## 识别的输出标记
//! ```text
//!  SCF Done:  E(RB3LYP) =  -232.248643205     A.U. after   11 cycles
//!  Frequencies --    -512.3456               105.2214               230.1120
//!  Zero-point correction=                           0.083211 (Hartree/Particle)
//!  Sum of electronic and zero-point Energies=           -232.165432
//!  Sum of electronic and thermal Enthalpies=            -232.158111
//!  Sum of electronic and thermal Free Energies=         -232.194321
//!  Normal termination of Gaussian 09 at Mon Jan  1 12:00:00 2024.
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/` 下所有提取器使用
//! - 使用 `regex` crate

use crate::error::{GautilityError, Result};
use regex::Regex;

/// 带名称的正则模式
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
}

impl Pattern {
    fn new(name: &'static str, source: &str) -> Result<Self> {
        Ok(Pattern {
            name,
            regex: Regex::new(source)?,
        })
    }

    /// 按出现顺序返回第一个捕获组
    pub fn captures<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// 最后一次匹配的捕获组（"最后一次为准"）
    pub fn last_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.captures(text).pop()
    }

    /// 匹配次数
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// 所有匹配值解析为 f64
    pub fn values(&self, text: &str) -> Result<Vec<f64>> {
        self.captures(text)
            .into_iter()
            .map(|t| self.parse_number(t))
            .collect()
    }

    /// 最后一次匹配值
    pub fn last_value(&self, text: &str) -> Result<Option<f64>> {
        self.last_capture(text)
            .map(|t| self.parse_number(t))
            .transpose()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    fn parse_number(&self, token: &str) -> Result<f64> {
        token
            .trim()
            .parse::<f64>()
            .map_err(|_| GautilityError::UnparseableToken {
                token: format!("{} ({})", token.trim(), self.name),
            })
    }
}

/// Gaussian 日志所需的全部模式
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub scf_energy: Pattern,
    pub frequencies: Pattern,
    pub enthalpy: Pattern,
    pub free_energy: Pattern,
    pub zpe: Pattern,
    pub eezpe: Pattern,
    pub route: Pattern,
    pub termination: Pattern,
}

impl PatternSet {
    /// 构造 Gaussian 09/16 日志模式集合
    pub fn gaussian() -> Result<Self> {
        Ok(PatternSet {
            scf_energy: Pattern::new(
                "SCF energy",
                r"SCF Done:\s+E\([^)]*\)\s*=\s*(-?\d+\.\d+(?:[Ee][-+]?\d+)?)",
            )?,
            frequencies: Pattern::new("frequencies", r"Frequencies --[ \t]([^\n]*)")?,
            enthalpy: Pattern::new(
                "enthalpy",
                r"Sum of electronic and thermal Enthalpies=\s*(-?\d+\.\d+)",
            )?,
            free_energy: Pattern::new(
                "free energy",
                r"Sum of electronic and thermal Free Energies=\s*(-?\d+\.\d+)",
            )?,
            zpe: Pattern::new("ZPE", r"Zero-point correction=\s*(-?\d+\.\d+)")?,
            eezpe: Pattern::new(
                "EEZPE",
                r"Sum of electronic and zero-point Energies=\s*(-?\d+\.\d+)",
            )?,
            // 路由块：分隔线、`#` 行、若干续行、分隔线
            // 续行可能以 `-` 开头（`6-31g` 在 `-` 前折行），但不会以 4 个以上 `-` 开头
            route: Pattern::new(
                "route",
                r"(?m)^ *-{4,}\r?\n *#([^\r\n]*)\r?\n((?: (?:[^-\r\n]|-{1,3}[^-\r\n])[^\r\n]*\r?\n)*) *-{4,}",
            )?,
            termination: Pattern::new("termination", r"Normal termination of Gaussian")?,
        })
    }
}
