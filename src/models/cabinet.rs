//! Cabinet entity: an LED tile with a fixed pixel resolution. The pixel
//! pitch is derived from width_mm / width_pixels and recomputed on every
//! create/update; it is never set directly.

use crate::core::calculator::pitch::pixel_pitch;
use crate::store::entity::CatalogEntity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinetKind {
    Indoor,
    Outdoor,
}

impl CabinetKind {
    pub fn code(&self) -> &str {
        match self {
            CabinetKind::Indoor => "indoor",
            CabinetKind::Outdoor => "outdoor",
        }
    }

    /// Parse a CLI argument (case-insensitive, accepts the full word or its
    /// first letter).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "indoor" | "i" => Some(CabinetKind::Indoor),
            "outdoor" | "o" => Some(CabinetKind::Outdoor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabinet {
    pub id: Uuid,
    pub name: String,
    pub kind: CabinetKind,

    pub width_mm: f64,
    pub height_mm: f64,
    pub width_pixels: u32,
    pub height_pixels: u32,

    /// Derived: width_mm / width_pixels, rounded to 2 decimals.
    pub pixel_pitch: f64,

    pub power_watts: f64,
    pub weight_kg: f64,
    pub voltage: f64,
    pub dual_voltage: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct CabinetPayload {
    pub name: String,
    pub kind: CabinetKind,
    pub width_mm: f64,
    pub height_mm: f64,
    pub width_pixels: u32,
    pub height_pixels: u32,
    pub power_watts: f64,
    pub weight_kg: f64,
    pub voltage: f64,
    pub dual_voltage: bool,
    pub brightness: Option<u32>,
    pub refresh_rate: Option<u32>,
    pub power_factor: Option<f64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CabinetPatch {
    pub name: Option<String>,
    pub kind: Option<CabinetKind>,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub width_pixels: Option<u32>,
    pub height_pixels: Option<u32>,
    pub power_watts: Option<f64>,
    pub weight_kg: Option<f64>,
    pub voltage: Option<f64>,
    pub dual_voltage: Option<bool>,
    pub brightness: Option<u32>,
    pub refresh_rate: Option<u32>,
    pub power_factor: Option<f64>,
    pub description: Option<String>,
}

impl Cabinet {
    pub fn from_payload(p: CabinetPayload) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::nil(),
            name: p.name,
            kind: p.kind,
            width_mm: p.width_mm,
            height_mm: p.height_mm,
            width_pixels: p.width_pixels,
            height_pixels: p.height_pixels,
            // placeholder; the store recomputes it on create
            pixel_pitch: 0.0,
            power_watts: p.power_watts,
            weight_kg: p.weight_kg,
            voltage: p.voltage,
            dual_voltage: p.dual_voltage,
            brightness: p.brightness,
            refresh_rate: p.refresh_rate,
            power_factor: p.power_factor,
            description: p.description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_payload(&self) -> CabinetPayload {
        CabinetPayload {
            name: self.name.clone(),
            kind: self.kind,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            width_pixels: self.width_pixels,
            height_pixels: self.height_pixels,
            power_watts: self.power_watts,
            weight_kg: self.weight_kg,
            voltage: self.voltage,
            dual_voltage: self.dual_voltage,
            brightness: self.brightness,
            refresh_rate: self.refresh_rate,
            power_factor: self.power_factor,
            description: self.description.clone(),
        }
    }

    pub fn apply_patch(&mut self, patch: &CabinetPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = patch.kind {
            self.kind = v;
        }
        if let Some(v) = patch.width_mm {
            self.width_mm = v;
        }
        if let Some(v) = patch.height_mm {
            self.height_mm = v;
        }
        if let Some(v) = patch.width_pixels {
            self.width_pixels = v;
        }
        if let Some(v) = patch.height_pixels {
            self.height_pixels = v;
        }
        if let Some(v) = patch.power_watts {
            self.power_watts = v;
        }
        if let Some(v) = patch.weight_kg {
            self.weight_kg = v;
        }
        if let Some(v) = patch.voltage {
            self.voltage = v;
        }
        if let Some(v) = patch.dual_voltage {
            self.dual_voltage = v;
        }
        if let Some(v) = patch.brightness {
            self.brightness = Some(v);
        }
        if let Some(v) = patch.refresh_rate {
            self.refresh_rate = Some(v);
        }
        if let Some(v) = patch.power_factor {
            self.power_factor = Some(v);
        }
        if let Some(v) = &patch.description {
            self.description = Some(v.clone());
        }
    }
}

impl CatalogEntity for Cabinet {
    const DOC_KEY: &'static str = "cabinets";
    const LABEL: &'static str = "cabinet";

    fn id(&self) -> Uuid {
        self.id
    }

    fn stamp(&mut self, id: Uuid, now: DateTime<Local>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Local>) {
        self.updated_at = now;
    }

    fn recompute(&mut self) {
        self.pixel_pitch = pixel_pitch(self.width_mm, self.width_pixels);
    }
}
