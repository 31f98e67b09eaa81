//! Power and price aggregations.

/// Sum a set of power draws (watts).
pub fn total_power(watts: &[f64]) -> f64 {
    watts.iter().sum()
}

/// Price per square meter given a price and panel dimensions in mm.
/// Returns 0 when no price is set or the area is degenerate.
pub fn price_per_sqm(price: Option<f64>, width_mm: f64, height_mm: f64) -> f64 {
    let area = (width_mm / 1000.0) * (height_mm / 1000.0);
    match price {
        Some(p) if area > 0.0 => p / area,
        _ => 0.0,
    }
}
