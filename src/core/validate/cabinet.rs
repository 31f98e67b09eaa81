use crate::core::validate::{FieldErrors, FormMode};
use crate::models::cabinet::CabinetPayload;

pub fn validate(c: &CabinetPayload, _mode: FormMode) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if c.name.trim().is_empty() {
        errors.push("name", "Cabinet name is required");
    }
    if c.width_mm <= 0.0 {
        errors.push("width_mm", "Width must be greater than 0");
    }
    if c.height_mm <= 0.0 {
        errors.push("height_mm", "Height must be greater than 0");
    }
    if c.width_pixels == 0 {
        errors.push("width_pixels", "Horizontal resolution must be greater than 0");
    }
    if c.height_pixels == 0 {
        errors.push("height_pixels", "Vertical resolution must be greater than 0");
    }
    if c.power_watts <= 0.0 {
        errors.push("power_watts", "Power must be greater than 0");
    }
    if c.weight_kg <= 0.0 {
        errors.push("weight_kg", "Weight must be greater than 0");
    }
    if c.voltage <= 0.0 {
        errors.push("voltage", "Voltage must be greater than 0");
    }
    if let Some(b) = c.brightness {
        if b < 100 || b > 10_000 {
            errors.push("brightness", "Brightness should be between 100 and 10000 nits");
        }
    }
    if let Some(pf) = c.power_factor {
        if pf <= 0.0 || pf > 1.0 {
            errors.push("power_factor", "Power factor must be between 0 and 1");
        }
    }

    errors.into_result()
}
