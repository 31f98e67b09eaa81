use crate::cli::parser::CabinetCmd;
use crate::config::Config;
use crate::core::cabinet::{CabinetStats, parse_resolution};
use crate::core::query::{cmp_f64, directed, matches_search};
use crate::core::validate::{self, FormMode};
use crate::errors::{AppError, AppResult};
use crate::models::cabinet::{CabinetKind, CabinetPatch, CabinetPayload};
use crate::models::Cabinet;
use crate::store::{CatalogEntity, CatalogStore, open_port};
use crate::ui::messages::{store_banner, success};
use crate::utils::formatting::{DimensionUnit, format_dimensions, format_power};
use crate::utils::short_id;
use crate::utils::table::Table;

pub fn handle(cmd: &CabinetCmd, cfg: &Config) -> AppResult<()> {
    let port = open_port(cfg)?;
    let mut store = CatalogStore::<Cabinet>::open(port);
    if let Some(err) = store.last_error() {
        store_banner(err);
    }

    match cmd {
        CabinetCmd::Add {
            name,
            kind,
            width,
            height,
            resolution,
            power,
            weight,
            voltage,
            dual_voltage,
            brightness,
            refresh,
            power_factor,
            description,
        } => {
            let kind = CabinetKind::from_code(kind)
                .ok_or_else(|| AppError::InvalidKind(kind.clone()))?;
            let (width_pixels, height_pixels) = parse_resolution(resolution)?;

            let payload = CabinetPayload {
                name: name.clone(),
                kind,
                width_mm: *width,
                height_mm: *height,
                width_pixels,
                height_pixels,
                power_watts: *power,
                weight_kg: *weight,
                voltage: *voltage,
                dual_voltage: *dual_voltage,
                brightness: *brightness,
                refresh_rate: *refresh,
                power_factor: *power_factor,
                description: description.clone(),
            };

            validate::cabinet::validate(&payload, FormMode::Create)
                .map_err(AppError::Validation)?;

            let created = store.create(Cabinet::from_payload(payload))?;
            success(format!(
                "Cabinet '{}' added (id {}, pitch {:.2} mm)",
                created.name,
                short_id(&created.id),
                created.pixel_pitch
            ));
        }

        CabinetCmd::Edit {
            id,
            name,
            kind,
            width,
            height,
            resolution,
            power,
            weight,
            voltage,
            dual_voltage,
            brightness,
            refresh,
            power_factor,
            description,
        } => {
            let resolved = store.resolve_id(id)?;
            let existing = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Cabinet::LABEL,
                id: id.clone(),
            })?;

            let kind = match kind {
                Some(k) => {
                    Some(CabinetKind::from_code(k).ok_or_else(|| AppError::InvalidKind(k.clone()))?)
                }
                None => None,
            };
            let pixels = match resolution {
                Some(r) => Some(parse_resolution(r)?),
                None => None,
            };

            let patch = CabinetPatch {
                name: name.clone(),
                kind,
                width_mm: *width,
                height_mm: *height,
                width_pixels: pixels.map(|(w, _)| w),
                height_pixels: pixels.map(|(_, h)| h),
                power_watts: *power,
                weight_kg: *weight,
                voltage: *voltage,
                dual_voltage: *dual_voltage,
                brightness: *brightness,
                refresh_rate: *refresh,
                power_factor: *power_factor,
                description: description.clone(),
            };

            let mut preview = existing.clone();
            preview.apply_patch(&patch);
            validate::cabinet::validate(&preview.to_payload(), FormMode::Edit)
                .map_err(AppError::Validation)?;

            let updated = store.update(resolved, |c| c.apply_patch(&patch))?;
            success(format!(
                "Cabinet '{}' updated (id {}, pitch {:.2} mm)",
                updated.name,
                short_id(&updated.id),
                updated.pixel_pitch
            ));
        }

        CabinetCmd::Del { id } => {
            let resolved = store.resolve_id(id)?;
            let removed = store.delete(resolved)?;
            success(format!("Cabinet '{}' deleted", removed.name));
        }

        CabinetCmd::Show { id } => {
            let resolved = store.resolve_id(id)?;
            let cabinet = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Cabinet::LABEL,
                id: id.clone(),
            })?;
            print_cabinet(cabinet);
        }

        CabinetCmd::List {
            search,
            kind,
            sort,
            desc,
            stats,
        } => {
            let kind_filter = match kind.as_deref() {
                None | Some("all") => None,
                Some(k) => {
                    Some(CabinetKind::from_code(k).ok_or_else(|| AppError::InvalidKind(k.to_string()))?)
                }
            };

            let mut cabinets: Vec<&Cabinet> = store
                .items()
                .iter()
                .filter(|c| {
                    let term = search.as_deref().unwrap_or("");
                    matches_search(term, &[c.name.as_str()])
                })
                .filter(|c| kind_filter.is_none_or(|k| c.kind == k))
                .collect();

            if let Some(key) = sort {
                sort_cabinets(&mut cabinets, key, *desc)?;
            }

            print_cabinet_table(&cabinets);

            if *stats {
                print_stats(&CabinetStats::collect(store.items()));
            }
        }
    }

    Ok(())
}

fn sort_cabinets(cabinets: &mut [&Cabinet], key: &str, desc: bool) -> AppResult<()> {
    match key {
        "name" => cabinets.sort_by(|a, b| directed(a.name.cmp(&b.name), desc)),
        "pitch" => cabinets.sort_by(|a, b| directed(cmp_f64(a.pixel_pitch, b.pixel_pitch), desc)),
        "power" => cabinets.sort_by(|a, b| directed(cmp_f64(a.power_watts, b.power_watts), desc)),
        "created" => cabinets.sort_by(|a, b| directed(a.created_at.cmp(&b.created_at), desc)),
        other => return Err(AppError::InvalidSortKey(other.to_string())),
    }
    Ok(())
}

fn print_cabinet_table(cabinets: &[&Cabinet]) {
    if cabinets.is_empty() {
        println!("No cabinets found.");
        return;
    }

    let mut table = Table::new(&[
        "ID", "Name", "Kind", "Size", "Resolution", "Pitch", "Power",
    ]);
    for c in cabinets {
        table.add_row(vec![
            short_id(&c.id),
            c.name.clone(),
            c.kind.code().to_string(),
            format_dimensions(c.width_mm, c.height_mm, DimensionUnit::Mm),
            format!("{}x{}", c.width_pixels, c.height_pixels),
            format!("{:.2} mm", c.pixel_pitch),
            format_power(c.power_watts),
        ]);
    }
    print!("{}", table.render());
    println!("\n{} cabinet(s)", cabinets.len());
}

fn print_cabinet(c: &Cabinet) {
    println!("=== {} ===", c.name);
    println!("ID:           {}", c.id);
    println!("Kind:         {}", c.kind.code());
    println!(
        "Dimensions:   {}",
        format_dimensions(c.width_mm, c.height_mm, DimensionUnit::Mm)
    );
    println!("Resolution:   {}x{} px", c.width_pixels, c.height_pixels);
    println!("Pixel pitch:  {:.2} mm", c.pixel_pitch);
    println!(
        "Power:        {} @ {:.0} V{}",
        format_power(c.power_watts),
        c.voltage,
        if c.dual_voltage { " (dual voltage)" } else { "" }
    );
    println!("Weight:       {:.1} kg", c.weight_kg);

    if let Some(b) = c.brightness {
        println!("Brightness:   {} nits", b);
    }
    if let Some(r) = c.refresh_rate {
        println!("Refresh rate: {} Hz", r);
    }
    if let Some(pf) = c.power_factor {
        println!("Power factor: {:.2}", pf);
    }
    if let Some(desc) = &c.description {
        println!("Description:  {}", desc);
    }
}

fn print_stats(stats: &CabinetStats) {
    println!("\n--- Statistics ---");
    println!("Total cabinets: {}", stats.total);
    println!("Indoor:         {}", stats.indoor);
    println!("Outdoor:        {}", stats.outdoor);
    println!("Average pitch:  {:.2} mm", stats.average_pixel_pitch);
    println!("Total power:    {}", format_power(stats.total_power));
}
