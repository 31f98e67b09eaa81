//! Formatting utilities for CLI and export outputs.

use chrono::NaiveDate;
use uuid::Uuid;

/// Unit used to render physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionUnit {
    Mm,
    Cm,
    M,
}

/// Power with the appropriate unit: kilowatts from 1000 W upward.
pub fn format_power(watts: f64) -> String {
    if watts >= 1000.0 {
        format!("{:.2} kW", watts / 1000.0)
    } else {
        format!("{:.0} W", watts)
    }
}

/// Dimension string in the requested unit, e.g. "500 × 500 mm".
pub fn format_dimensions(width_mm: f64, height_mm: f64, unit: DimensionUnit) -> String {
    match unit {
        DimensionUnit::Cm => format!("{:.1} × {:.1} cm", width_mm / 10.0, height_mm / 10.0),
        DimensionUnit::M => format!("{:.2} × {:.2} m", width_mm / 1000.0, height_mm / 1000.0),
        DimensionUnit::Mm => format!("{:.0} × {:.0} mm", width_mm, height_mm),
    }
}

/// Currency amount in pt-BR style grouping ("R$ 1.234,56"). The symbol
/// follows the configured currency code; unknown codes are printed as-is.
pub fn format_currency(value: f64, currency: &str) -> String {
    let symbol = match currency {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        other => other,
    };

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let frac = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {},{:02}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        frac
    )
}

/// Date rendered with the configured strftime pattern.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Short display form of an identity (first 8 hex digits). Commands accept
/// it back as a prefix.
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}
