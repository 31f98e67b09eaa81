//! Panel resolution and pixel density, derived from physical dimensions and
//! pixel pitch. Pure and deterministic: identical input, identical output.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelResolution {
    pub pixels_per_meter: f64,
    pub horizontal: u64,
    pub vertical: u64,
    pub total_pixels: u64,
    /// Pixels per square meter.
    pub pixel_density: f64,
}

/// Compute the resolution of a panel from width/height (mm) and pixel pitch
/// (mm). A non-positive pitch yields the zero resolution instead of a
/// division error.
pub fn panel_resolution(width_mm: f64, height_mm: f64, pitch_mm: f64) -> PanelResolution {
    if pitch_mm <= 0.0 {
        return PanelResolution {
            pixels_per_meter: 0.0,
            horizontal: 0,
            vertical: 0,
            total_pixels: 0,
            pixel_density: 0.0,
        };
    }

    let pixels_per_meter = 1000.0 / pitch_mm;
    let width_m = width_mm / 1000.0;
    let height_m = height_mm / 1000.0;

    let horizontal = (width_m * pixels_per_meter).floor() as u64;
    let vertical = (height_m * pixels_per_meter).floor() as u64;
    let total_pixels = horizontal * vertical;

    let area = width_m * height_m;
    let pixel_density = if area > 0.0 {
        total_pixels as f64 / area
    } else {
        0.0
    };

    PanelResolution {
        pixels_per_meter,
        horizontal,
        vertical,
        total_pixels,
        pixel_density,
    }
}
