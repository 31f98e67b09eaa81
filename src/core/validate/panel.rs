use crate::core::validate::{FieldErrors, FormMode};
use crate::models::panel::PanelPayload;

pub fn validate(p: &PanelPayload, _mode: FormMode) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if p.name.trim().len() < 2 {
        errors.push("name", "Panel name must be at least 2 characters long");
    }
    if p.manufacturer.trim().is_empty() {
        errors.push("manufacturer", "Manufacturer is required");
    }
    if p.model.trim().is_empty() {
        errors.push("model", "Model is required");
    }
    if p.width <= 0.0 {
        errors.push("width", "Width must be greater than 0");
    }
    if p.height <= 0.0 {
        errors.push("height", "Height must be greater than 0");
    }
    if p.pixel_pitch <= 0.0 {
        errors.push("pixel_pitch", "Pixel pitch must be greater than 0");
    }
    if p.power_consumption < 0.0 {
        errors.push("power_consumption", "Power consumption must be 0 or greater");
    }
    if p.input_voltage <= 0.0 {
        errors.push("input_voltage", "Input voltage must be greater than 0");
    }
    if p.brightness < 100 || p.brightness > 10_000 {
        errors.push("brightness", "Brightness should be between 100 and 10000 nits");
    }
    if p.temp_min >= p.temp_max {
        errors.push(
            "temp_min",
            "Minimum operating temperature must be below the maximum",
        );
    }
    if p.ip_rating.trim().is_empty() {
        errors.push("ip_rating", "IP rating is required");
    }
    if p.weight <= 0.0 {
        errors.push("weight", "Weight must be greater than 0");
    }
    if let Some(price) = p.price {
        if price < 0.0 {
            errors.push("price", "Price must be 0 or greater");
        }
    }

    errors.into_result()
}
