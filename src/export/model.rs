//! Tabular projection of the catalog entities, shared by the CSV and XLSX
//! writers. JSON export serializes the entities directly.

use crate::models::{Cabinet, Panel, Project};

pub struct Sheet {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

fn opt_f64(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn opt_u32(v: Option<u32>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

pub fn panel_sheet(panels: &[Panel]) -> Sheet {
    let headers = vec![
        "id",
        "name",
        "manufacturer",
        "model",
        "width_mm",
        "height_mm",
        "pixel_pitch_mm",
        "power_w",
        "input_voltage",
        "brightness_nits",
        "refresh_rate_hz",
        "temp_min_c",
        "temp_max_c",
        "ip_rating",
        "weight_kg",
        "price",
        "created_at",
        "updated_at",
    ];

    let rows = panels
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.manufacturer.clone(),
                p.model.clone(),
                p.width.to_string(),
                p.height.to_string(),
                p.pixel_pitch.to_string(),
                p.power_consumption.to_string(),
                p.input_voltage.to_string(),
                p.brightness.to_string(),
                p.refresh_rate.to_string(),
                p.temp_min.to_string(),
                p.temp_max.to_string(),
                p.ip_rating.clone(),
                p.weight.to_string(),
                opt_f64(p.price),
                p.created_at.to_rfc3339(),
                p.updated_at.to_rfc3339(),
            ]
        })
        .collect();

    Sheet { headers, rows }
}

pub fn cabinet_sheet(cabinets: &[Cabinet]) -> Sheet {
    let headers = vec![
        "id",
        "name",
        "kind",
        "width_mm",
        "height_mm",
        "width_pixels",
        "height_pixels",
        "pixel_pitch_mm",
        "power_w",
        "weight_kg",
        "voltage",
        "dual_voltage",
        "brightness_nits",
        "refresh_rate_hz",
        "power_factor",
        "created_at",
        "updated_at",
    ];

    let rows = cabinets
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.kind.code().to_string(),
                c.width_mm.to_string(),
                c.height_mm.to_string(),
                c.width_pixels.to_string(),
                c.height_pixels.to_string(),
                c.pixel_pitch.to_string(),
                c.power_watts.to_string(),
                c.weight_kg.to_string(),
                c.voltage.to_string(),
                c.dual_voltage.to_string(),
                opt_u32(c.brightness),
                opt_u32(c.refresh_rate),
                opt_f64(c.power_factor),
                c.created_at.to_rfc3339(),
                c.updated_at.to_rfc3339(),
            ]
        })
        .collect();

    Sheet { headers, rows }
}

pub fn project_sheet(projects: &[Project]) -> Sheet {
    let headers = vec![
        "id",
        "name",
        "client",
        "delivery_date",
        "status",
        "created_at",
        "updated_at",
    ];

    let rows = projects
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.name.clone(),
                p.client.clone(),
                p.delivery_date.format("%Y-%m-%d").to_string(),
                p.status.code().to_string(),
                p.created_at.to_rfc3339(),
                p.updated_at.to_rfc3339(),
            ]
        })
        .collect();

    Sheet { headers, rows }
}
