//! Viewing distance recommendation derived from pixel pitch. Rule of thumb:
//! minimum at 2x pitch, optimal at 3.5x, maximum at 8x (meters).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingDistance {
    pub min_m: f64,
    pub optimal_m: f64,
    pub max_m: f64,
}

pub fn viewing_distance(pitch_mm: f64) -> ViewingDistance {
    ViewingDistance {
        min_m: pitch_mm * 2.0,
        optimal_m: pitch_mm * 3.5,
        max_m: pitch_mm * 8.0,
    }
}
