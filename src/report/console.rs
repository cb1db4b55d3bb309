//! # 终端结果展示
//!
//! 将 `ResultRecord` 渲染为彩色终端输出。
//!
//! ## 功能
//! - 能量（Hartree，括号内为 kcal/mol）
//! - 频率按每行三个显示，并判断是否存在虚频
//! - IRC 曲线点数与相对能垒
//!
//! ## 依赖关系
//! - 被 `commands/check.rs` 使用
//! - 使用 `utils/output.rs`, `utils/units.rs`

use crate::models::{JobDescriptor, Quantity, QuantityValue, ResultRecord};
use crate::utils::output;
use crate::utils::units::ha_to_kcalmol;

use colored::Colorize;

/// 打印单个计算的结果
pub fn print_record(file: &str, job: &JobDescriptor, record: &ResultRecord) {
    println!(
        "\n{}",
        format!(" - Results for calculation '{}':", file).green().bold()
    );
    output::print_field("Route", job.route());

    if record.contains(Quantity::Energy) || record.contains(Quantity::FreeEnergy) {
        output::print_section("Energetics:");
        for quantity in [
            Quantity::Energy,
            Quantity::Enthalpy,
            Quantity::FreeEnergy,
            Quantity::Zpe,
            Quantity::Eezpe,
        ] {
            if let Some(value) = record.get(quantity) {
                output::print_field(&label(quantity), &format_energy(value));
            }
        }
    } else if let Some(value) = record.get(Quantity::Enthalpy) {
        output::print_section("Energetics:");
        output::print_field(&label(Quantity::Enthalpy), &format_energy(value));
    }

    if let Some(freqs) = record.series(Quantity::Frequencies) {
        output::print_section("Frequencies:");
        for row in frequency_rows(freqs) {
            println!("    {}", row);
        }

        let n_imag = record.imaginary_count().unwrap_or(0);
        if n_imag == 0 {
            println!("\n    There are no imaginary frequencies.");
            output::print_note("This geometry is a minimum.");
        } else {
            println!("\n    There are {} imaginary frequencies.", n_imag);
            output::print_note("This geometry might be a TS.");
        }
    }

    if let Some(profile) = record.series(Quantity::Irc) {
        output::print_section("IRC:");
        output::print_field("Points", &profile.len().to_string());
        if let Some(barrier) = irc_barrier(profile) {
            output::print_field(
                "Barrier from first point",
                &format!("{:.2} kcal/mol", barrier),
            );
        }
    }

    println!("\n    {}", format!("Calculation '{}' done.", file).green());
}

fn label(quantity: Quantity) -> String {
    match quantity {
        Quantity::Energy => "Electronic Energy".to_string(),
        other => other.to_string(),
    }
}

/// 能量值显示：`-76.409661 Ha (-47947.27 kcal/mol)`
pub fn format_energy(value: &QuantityValue) -> String {
    match value {
        QuantityValue::Scalar(v) => {
            format!("{:.6} Ha ({:.2} kcal/mol)", v, ha_to_kcalmol(*v))
        }
        other => other.to_string(),
    }
}

/// 频率按每行三个格式化，最后一行可不足三个
pub fn frequency_rows(freqs: &[f64]) -> Vec<String> {
    freqs
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|f| format!("{:>10.1}", f))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// 曲线最高点相对第一个点的能垒 (kcal/mol)
pub fn irc_barrier(profile: &[f64]) -> Option<f64> {
    let first = *profile.first()?;
    let max = profile.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(ha_to_kcalmol(max - first))
}
