//! Pixel pitch derivation for cabinets.

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pixel pitch in millimeters: physical width divided by pixel count,
/// rounded to 2 decimals. A zero pixel count yields 0 instead of an error.
pub fn pixel_pitch(width_mm: f64, width_pixels: u32) -> f64 {
    if width_pixels == 0 {
        return 0.0;
    }
    round2(width_mm / width_pixels as f64)
}
