//! Panel domain logic: aggregate statistics and the duplicate operation.

use crate::core::calculator::pitch::round2;
use crate::models::panel::Panel;
use std::collections::BTreeMap;

/// Aggregates recomputed on demand from the current collection; never
/// cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStats {
    pub total: usize,
    /// Count per manufacturer, sorted by name.
    pub by_manufacturer: Vec<(String, usize)>,
    pub average_pitch: f64,
    pub total_power: f64,
}

impl PanelStats {
    pub fn collect(panels: &[Panel]) -> Self {
        let total = panels.len();

        let mut by_manufacturer: BTreeMap<String, usize> = BTreeMap::new();
        for p in panels {
            *by_manufacturer.entry(p.manufacturer.clone()).or_insert(0) += 1;
        }

        let average_pitch = if total > 0 {
            round2(panels.iter().map(|p| p.pixel_pitch).sum::<f64>() / total as f64)
        } else {
            0.0
        };

        let total_power = panels.iter().map(|p| p.power_consumption).sum();

        Self {
            total,
            by_manufacturer: by_manufacturer.into_iter().collect(),
            average_pitch,
            total_power,
        }
    }
}

/// Copy of an existing panel under a "(Copy)" name. The caller passes the
/// clone through the store's create to get a fresh identity and timestamps.
pub fn duplicate_of(panel: &Panel) -> Panel {
    let mut copy = panel.clone();
    copy.name = format!("{} (Copy)", panel.name);
    copy
}
