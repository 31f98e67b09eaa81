//! Panel entity: a single LED panel product with physical, electrical and
//! optical specifications. Field names follow the persisted JSON schema.

use crate::store::entity::CatalogEntity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: Uuid,
    pub name: String,
    pub manufacturer: String,
    pub model: String,

    /// Physical width in millimeters.
    pub width: f64,
    /// Physical height in millimeters.
    pub height: f64,
    /// Center-to-center pixel spacing in millimeters.
    pub pixel_pitch: f64,

    /// Power draw in watts.
    pub power_consumption: f64,
    /// Input voltage (V).
    pub input_voltage: f64,

    /// Brightness in nits.
    pub brightness: u32,
    /// Refresh rate in Hz.
    pub refresh_rate: u32,

    /// Operating temperature range (°C).
    pub temp_min: i32,
    pub temp_max: i32,
    /// Ingress-protection rating, e.g. "IP65".
    pub ip_rating: String,

    /// Weight in kilograms.
    pub weight: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

/// Form payload for creating a panel. Identity, timestamps and derived
/// fields are assigned by the store.
#[derive(Debug, Clone)]
pub struct PanelPayload {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub width: f64,
    pub height: f64,
    pub pixel_pitch: f64,
    pub power_consumption: f64,
    pub input_voltage: f64,
    pub brightness: u32,
    pub refresh_rate: u32,
    pub temp_min: i32,
    pub temp_max: i32,
    pub ip_rating: String,
    pub weight: f64,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// Partial field changes for `panel edit`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct PanelPatch {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pixel_pitch: Option<f64>,
    pub power_consumption: Option<f64>,
    pub input_voltage: Option<f64>,
    pub brightness: Option<u32>,
    pub refresh_rate: Option<u32>,
    pub temp_min: Option<i32>,
    pub temp_max: Option<i32>,
    pub ip_rating: Option<String>,
    pub weight: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl Panel {
    /// Build a panel from a validated payload. Identity and timestamps are
    /// placeholders until the store stamps them on create.
    pub fn from_payload(p: PanelPayload) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::nil(),
            name: p.name,
            manufacturer: p.manufacturer,
            model: p.model,
            width: p.width,
            height: p.height,
            pixel_pitch: p.pixel_pitch,
            power_consumption: p.power_consumption,
            input_voltage: p.input_voltage,
            brightness: p.brightness,
            refresh_rate: p.refresh_rate,
            temp_min: p.temp_min,
            temp_max: p.temp_max,
            ip_rating: p.ip_rating,
            weight: p.weight,
            price: p.price,
            description: p.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Current field values as a payload (used to re-validate edits).
    pub fn to_payload(&self) -> PanelPayload {
        PanelPayload {
            name: self.name.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
            width: self.width,
            height: self.height,
            pixel_pitch: self.pixel_pitch,
            power_consumption: self.power_consumption,
            input_voltage: self.input_voltage,
            brightness: self.brightness,
            refresh_rate: self.refresh_rate,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            ip_rating: self.ip_rating.clone(),
            weight: self.weight,
            price: self.price,
            description: self.description.clone(),
        }
    }

    pub fn apply_patch(&mut self, patch: &PanelPatch) {
        if let Some(v) = &patch.name {
            self.name = v.clone();
        }
        if let Some(v) = &patch.manufacturer {
            self.manufacturer = v.clone();
        }
        if let Some(v) = &patch.model {
            self.model = v.clone();
        }
        if let Some(v) = patch.width {
            self.width = v;
        }
        if let Some(v) = patch.height {
            self.height = v;
        }
        if let Some(v) = patch.pixel_pitch {
            self.pixel_pitch = v;
        }
        if let Some(v) = patch.power_consumption {
            self.power_consumption = v;
        }
        if let Some(v) = patch.input_voltage {
            self.input_voltage = v;
        }
        if let Some(v) = patch.brightness {
            self.brightness = v;
        }
        if let Some(v) = patch.refresh_rate {
            self.refresh_rate = v;
        }
        if let Some(v) = patch.temp_min {
            self.temp_min = v;
        }
        if let Some(v) = patch.temp_max {
            self.temp_max = v;
        }
        if let Some(v) = &patch.ip_rating {
            self.ip_rating = v.clone();
        }
        if let Some(v) = patch.weight {
            self.weight = v;
        }
        if let Some(v) = patch.price {
            self.price = Some(v);
        }
        if let Some(v) = &patch.description {
            self.description = Some(v.clone());
        }
    }
}

impl CatalogEntity for Panel {
    const DOC_KEY: &'static str = "panels";
    const LABEL: &'static str = "panel";

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
}
