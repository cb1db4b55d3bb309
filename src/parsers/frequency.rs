//! # 频率数据解析与修复
//!
//! Gaussian 以固定宽度格式输出频率，数值过大时负频率会与前一个值粘连，
//! 例如 `-1523.4512-1498.2231`。解析失败时先修复再重试一次。
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs` 使用

use crate::error::{GautilityError, Result};

/// 解析频率 token，失败时修复粘连 token 后重试
pub fn parse_frequency_tokens(tokens: &[&str]) -> Result<Vec<f64>> {
    if let Ok(values) = parse_all(tokens) {
        return Ok(values);
    }

    let repaired = repair_tokens(tokens);
    let repaired: Vec<&str> = repaired.iter().map(|s| s.as_str()).collect();
    parse_all(&repaired)
}

fn parse_all(tokens: &[&str]) -> Result<Vec<f64>> {
    tokens
        .iter()
        .map(|t| {
            t.parse::<f64>().map_err(|_| GautilityError::UnparseableToken {
                token: t.to_string(),
            })
        })
        .collect()
}

/// 拆开所有含内部负号的 token，保持原有顺序
pub fn repair_tokens(tokens: &[&str]) -> Vec<String> {
    let mut repaired = Vec::with_capacity(tokens.len() + 1);

    for token in tokens {
        match split_fused(token) {
            Some(parts) => repaired.extend(parts),
            None => repaired.push(token.to_string()),
        }
    }

    repaired
}

/// 在每个内部 `-` 处切分（跳过首字符与指数记号后的 `-`）
fn split_fused(token: &str) -> Option<Vec<String>> {
    let bytes = token.as_bytes();
    let cuts: Vec<usize> = (1..bytes.len())
        .filter(|&i| bytes[i] == b'-' && !matches!(bytes[i - 1], b'e' | b'E'))
        .collect();

    if cuts.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        parts.push(token[start..cut].to_string());
        start = cut;
    }
    parts.push(token[start..].to_string());

    Some(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tokens() {
        let freqs = parse_frequency_tokens(&["-512.3", "105.2", "230.1"]).unwrap();
        assert_eq!(freqs, vec![-512.3, 105.2, 230.1]);
    }

    #[test]
    fn test_repair_fused_negative() {
        let freqs = parse_frequency_tokens(&["100.0", "-50.2-30.1", "75.0"]).unwrap();
        assert_eq!(freqs, vec![100.0, -50.2, -30.1, 75.0]);
    }

    #[test]
    fn test_repair_positive_then_negative() {
        assert_eq!(
            repair_tokens(&["1523.4512-1498.2231"]),
            vec!["1523.4512".to_string(), "-1498.2231".to_string()]
        );
    }

    #[test]
    fn test_repair_all_occurrences() {
        let freqs =
            parse_frequency_tokens(&["-10.0-20.0", "30.0", "-40.0-50.0-60.0"]).unwrap();
        assert_eq!(freqs, vec![-10.0, -20.0, 30.0, -40.0, -50.0, -60.0]);
    }

    #[test]
    fn test_exponent_not_split() {
        assert_eq!(repair_tokens(&["1.5e-3"]), vec!["1.5e-3".to_string()]);
    }

    #[test]
    fn test_unrepairable_token() {
        let err = parse_frequency_tokens(&["100.0", "abc", "75.0"]).unwrap_err();
        match err {
            GautilityError::UnparseableToken { token } => assert_eq!(token, "abc"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
