//! # IRC 能量曲线重建
//!
//! Gaussian 按方向分组输出 IRC 各步的 SCF 能量（先一侧，再另一侧），
//! 而不是按反应坐标顺序。将前一段反转后与后一段拼接，
//! 得到从一个端点经过渡态到另一端点的连续曲线。
//!
//! ## 规则
//! - N 为偶数：反转前 N/2 个，拼接后 N/2 个
//! - N 为奇数：mid = N/2，反转前 mid+1 个，拼接剩余 N-mid-1 个
//!
//! ## 依赖关系
//! - 被 `parsers/extract.rs` 使用

use crate::error::{GautilityError, Result};

/// 重建 IRC 能量曲线
pub fn reconstruct_profile(energies: &[f64]) -> Result<Vec<f64>> {
    let n = energies.len();
    if n == 0 {
        return Err(GautilityError::EmptyIrcProfile);
    }

    let split = if n % 2 == 0 { n / 2 } else { n / 2 + 1 };
    let (head, tail) = energies.split_at(split);

    Ok(head.iter().rev().chain(tail.iter()).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_profile() {
        let profile = reconstruct_profile(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(profile, vec![3.0, 2.0, 1.0, 4.0, 5.0]);
    }

    #[test]
    fn test_even_profile() {
        for n in (2..=12).step_by(2) {
            let energies: Vec<f64> = (0..n).map(|i| -100.0 + i as f64 * 0.01).collect();
            let profile = reconstruct_profile(&energies).unwrap();
            assert_eq!(profile.len(), n);

            let mut first_half = energies[..n / 2].to_vec();
            first_half.reverse();
            assert_eq!(&profile[..n / 2], first_half.as_slice());
            assert_eq!(&profile[n / 2..], &energies[n / 2..]);
        }
    }

    #[test]
    fn test_single_point() {
        assert_eq!(reconstruct_profile(&[-1.5]).unwrap(), vec![-1.5]);
    }

    #[test]
    fn test_empty_profile_fails() {
        assert!(matches!(
            reconstruct_profile(&[]),
            Err(GautilityError::EmptyIrcProfile)
        ));
    }
}
