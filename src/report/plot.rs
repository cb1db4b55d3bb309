//! # IRC 能量曲线绘图
//!
//! 使用 `plotters` 将重建后的 IRC 曲线绘制为 PNG，
//! 纵轴为相对第一个点的能量 (kcal/mol)。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 调用
//! - 使用 `utils/units.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{GautilityError, Result};
use crate::utils::units::ha_to_kcalmol;

use plotters::prelude::*;
use std::path::Path;

/// IRC 曲线的相对能量数据 (点序号, kcal/mol)
pub fn relative_profile(profile: &[f64]) -> Vec<(f64, f64)> {
    let reference = profile.first().copied().unwrap_or(0.0);
    profile
        .iter()
        .enumerate()
        .map(|(i, e)| (i as f64, ha_to_kcalmol(e - reference)))
        .collect()
}

/// 生成 IRC 曲线 PNG
pub fn generate_irc_plot(profile: &[f64], output_path: &Path, title: &str) -> Result<()> {
    let data = relative_profile(profile);
    if data.is_empty() {
        return Err(GautilityError::EmptyIrcProfile);
    }

    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(0.5);
    let x_max = (data.len() as f64 - 1.0).max(1.0);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(x_max + 0.5), (y_min - y_margin)..(y_max + y_margin))
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Reaction coordinate (step)")
        .y_desc("Relative energy (kcal/mol)")
        .draw()
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(data.iter().copied(), line_color.stroke_width(2)))
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    chart
        .draw_series(
            data.iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, line_color.filled())),
        )
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    // 标记最高点（过渡态附近）
    if let Some((ts_x, ts_y)) = data
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        chart
            .draw_series(std::iter::once(Circle::new((ts_x, ts_y), 7, RED.filled())))
            .map_err(|e| GautilityError::PlotError(e.to_string()))?
            .label("Highest point")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| GautilityError::PlotError(e.to_string()))?;
    }

    root.present()
        .map_err(|e| GautilityError::PlotError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_profile() {
        let data = relative_profile(&[-1.0, -0.99, -1.01]);
        assert_eq!(data.len(), 3);
        assert_eq!(data[0], (0.0, 0.0));
        assert!((data[1].1 - 6.27503).abs() < 1e-6);
        assert!((data[2].1 + 6.27503).abs() < 1e-6);
        assert_eq!(data[2].0, 2.0);
    }

    #[test]
    fn test_empty_plot_fails() {
        let path = std::env::temp_dir().join("gautility-empty-irc.png");
        assert!(generate_irc_plot(&[], &path, "empty").is_err());
    }
}
