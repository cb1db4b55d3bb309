//! # 单位换算
//!
//! 仅用于显示，不写回 `ResultRecord`。

/// 1 Hartree 对应的 kcal/mol
pub const HARTREE_TO_KCAL_MOL: f64 = 627.503;

/// Hartree → kcal/mol
pub fn ha_to_kcalmol(hartree: f64) -> f64 {
    hartree * HARTREE_TO_KCAL_MOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ha_to_kcalmol() {
        assert!((ha_to_kcalmol(1.0) - 627.503).abs() < 1e-6);
        assert!((ha_to_kcalmol(-0.5) + 313.7515).abs() < 1e-6);
        assert_eq!(ha_to_kcalmol(0.0), 0.0);
    }
}
