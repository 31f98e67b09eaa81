//! Cabinet domain logic: resolution argument parsing and aggregate
//! statistics.

use crate::core::calculator::pitch::round2;
use crate::errors::{AppError, AppResult};
use crate::models::cabinet::{Cabinet, CabinetKind};
use regex::Regex;

/// Parse a `WIDTHxHEIGHT` pixel resolution argument, e.g. "192x192".
pub fn parse_resolution(arg: &str) -> AppResult<(u32, u32)> {
    let re = Regex::new(r"^(\d+)\s*[xX×]\s*(\d+)$").map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re
        .captures(arg.trim())
        .ok_or_else(|| AppError::InvalidResolution(arg.to_string()))?;

    let width = caps[1]
        .parse::<u32>()
        .map_err(|_| AppError::InvalidResolution(arg.to_string()))?;
    let height = caps[2]
        .parse::<u32>()
        .map_err(|_| AppError::InvalidResolution(arg.to_string()))?;
    Ok((width, height))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CabinetStats {
    pub total: usize,
    pub indoor: usize,
    pub outdoor: usize,
    pub average_pixel_pitch: f64,
    pub total_power: f64,
}

impl CabinetStats {
    pub fn collect(cabinets: &[Cabinet]) -> Self {
        let total = cabinets.len();
        let indoor = cabinets
            .iter()
            .filter(|c| c.kind == CabinetKind::Indoor)
            .count();
        let outdoor = total - indoor;

        let average_pixel_pitch = if total > 0 {
            round2(cabinets.iter().map(|c| c.pixel_pitch).sum::<f64>() / total as f64)
        } else {
            0.0
        };

        let total_power = cabinets.iter().map(|c| c.power_watts).sum();

        Self {
            total,
            indoor,
            outdoor,
            average_pixel_pitch,
            total_power,
        }
    }
}
