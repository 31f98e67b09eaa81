use crate::core::validate::{FieldErrors, FormMode};
use crate::models::project::ProjectPayload;
use chrono::NaiveDate;

pub fn validate(p: &ProjectPayload, mode: FormMode, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if p.name.trim().is_empty() {
        errors.push("name", "Project name is required");
    }
    if p.client.trim().is_empty() {
        errors.push("client", "Client is required");
    }
    // Existing projects keep whatever delivery date they have; only new
    // projects are rejected for a date already in the past.
    if mode == FormMode::Create && p.delivery_date < today {
        errors.push("delivery_date", "Delivery date cannot be in the past");
    }

    errors.into_result()
}
