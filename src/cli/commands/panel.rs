use crate::cli::parser::PanelCmd;
use crate::config::Config;
use crate::core::calculator::power::price_per_sqm;
use crate::core::calculator::resolution::panel_resolution;
use crate::core::calculator::viewing::viewing_distance;
use crate::core::panel::{PanelStats, duplicate_of};
use crate::core::query::{cmp_f64, directed, matches_search};
use crate::core::validate::{self, FormMode};
use crate::errors::{AppError, AppResult};
use crate::models::Panel;
use crate::models::panel::{PanelPatch, PanelPayload};
use crate::store::{CatalogEntity, CatalogStore, open_port};
use crate::ui::messages::{store_banner, success};
use crate::utils::formatting::{DimensionUnit, format_currency, format_dimensions, format_power};
use crate::utils::short_id;
use crate::utils::table::Table;

pub fn handle(cmd: &PanelCmd, cfg: &Config) -> AppResult<()> {
    let port = open_port(cfg)?;
    let mut store = CatalogStore::<Panel>::open(port);
    if let Some(err) = store.last_error() {
        store_banner(err);
    }

    match cmd {
        PanelCmd::Add {
            name,
            manufacturer,
            model,
            width,
            height,
            pitch,
            power,
            voltage,
            brightness,
            refresh,
            temp_min,
            temp_max,
            ip_rating,
            weight,
            price,
            description,
        } => {
            let payload = PanelPayload {
                name: name.clone(),
                manufacturer: manufacturer.clone(),
                model: model.clone(),
                width: *width,
                height: *height,
                pixel_pitch: *pitch,
                power_consumption: *power,
                input_voltage: *voltage,
                brightness: *brightness,
                refresh_rate: *refresh,
                temp_min: *temp_min,
                temp_max: *temp_max,
                ip_rating: ip_rating.clone(),
                weight: *weight,
                price: *price,
                description: description.clone(),
            };

            validate::panel::validate(&payload, FormMode::Create).map_err(AppError::Validation)?;

            let created = store.create(Panel::from_payload(payload))?;
            success(format!(
                "Panel '{}' added (id {})",
                created.name,
                short_id(&created.id)
            ));
        }

        PanelCmd::Edit {
            id,
            name,
            manufacturer,
            model,
            width,
            height,
            pitch,
            power,
            voltage,
            brightness,
            refresh,
            temp_min,
            temp_max,
            ip_rating,
            weight,
            price,
            description,
        } => {
            let resolved = store.resolve_id(id)?;
            let existing = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Panel::LABEL,
                id: id.clone(),
            })?;

            let patch = PanelPatch {
                name: name.clone(),
                manufacturer: manufacturer.clone(),
                model: model.clone(),
                width: *width,
                height: *height,
                pixel_pitch: *pitch,
                power_consumption: *power,
                input_voltage: *voltage,
                brightness: *brightness,
                refresh_rate: *refresh,
                temp_min: *temp_min,
                temp_max: *temp_max,
                ip_rating: ip_rating.clone(),
                weight: *weight,
                price: *price,
                description: description.clone(),
            };

            // Validate the merged result before touching the store.
            let mut preview = existing.clone();
            preview.apply_patch(&patch);
            validate::panel::validate(&preview.to_payload(), FormMode::Edit)
                .map_err(AppError::Validation)?;

            let updated = store.update(resolved, |p| p.apply_patch(&patch))?;
            success(format!(
                "Panel '{}' updated (id {})",
                updated.name,
                short_id(&updated.id)
            ));
        }

        PanelCmd::Del { id } => {
            let resolved = store.resolve_id(id)?;
            let removed = store.delete(resolved)?;
            success(format!("Panel '{}' deleted", removed.name));
        }

        PanelCmd::Dup { id } => {
            let resolved = store.resolve_id(id)?;
            let original = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Panel::LABEL,
                id: id.clone(),
            })?;

            let copy = store.create(duplicate_of(original))?;
            success(format!(
                "Panel duplicated as '{}' (id {})",
                copy.name,
                short_id(&copy.id)
            ));
        }

        PanelCmd::Show { id } => {
            let resolved = store.resolve_id(id)?;
            let panel = store.get(resolved).ok_or_else(|| AppError::NotFound {
                entity: Panel::LABEL,
                id: id.clone(),
            })?;
            print_panel(panel, cfg);
        }

        PanelCmd::List {
            search,
            manufacturer,
            sort,
            desc,
            stats,
        } => {
            let mut panels: Vec<&Panel> = store
                .items()
                .iter()
                .filter(|p| {
                    let term = search.as_deref().unwrap_or("");
                    matches_search(
                        term,
                        &[p.name.as_str(), p.manufacturer.as_str(), p.model.as_str()],
                    )
                })
                .filter(|p| match manufacturer {
                    Some(m) => p.manufacturer.eq_ignore_ascii_case(m),
                    None => true,
                })
                .collect();

            if let Some(key) = sort {
                sort_panels(&mut panels, key, *desc)?;
            }

            print_panel_table(&panels, cfg);

            if *stats {
                print_stats(&PanelStats::collect(store.items()));
            }
        }
    }

    Ok(())
}

fn sort_panels(panels: &mut [&Panel], key: &str, desc: bool) -> AppResult<()> {
    match key {
        "name" => panels.sort_by(|a, b| directed(a.name.cmp(&b.name), desc)),
        "manufacturer" => {
            panels.sort_by(|a, b| directed(a.manufacturer.cmp(&b.manufacturer), desc))
        }
        "pitch" => panels.sort_by(|a, b| directed(cmp_f64(a.pixel_pitch, b.pixel_pitch), desc)),
        "power" => panels.sort_by(|a, b| {
            directed(cmp_f64(a.power_consumption, b.power_consumption), desc)
        }),
        "created" => panels.sort_by(|a, b| directed(a.created_at.cmp(&b.created_at), desc)),
        other => return Err(AppError::InvalidSortKey(other.to_string())),
    }
    Ok(())
}

fn print_panel_table(panels: &[&Panel], cfg: &Config) {
    if panels.is_empty() {
        println!("No panels found.");
        return;
    }

    let mut table = Table::new(&[
        "ID", "Name", "Manufacturer", "Model", "Pitch", "Size", "Power", "Price",
    ]);
    for p in panels {
        table.add_row(vec![
            short_id(&p.id),
            p.name.clone(),
            p.manufacturer.clone(),
            p.model.clone(),
            format!("{:.2} mm", p.pixel_pitch),
            format_dimensions(p.width, p.height, DimensionUnit::Mm),
            format_power(p.power_consumption),
            p.price
                .map(|v| format_currency(v, &cfg.currency))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    print!("{}", table.render());
    println!("\n{} panel(s)", panels.len());
}

fn print_panel(p: &Panel, cfg: &Config) {
    let res = panel_resolution(p.width, p.height, p.pixel_pitch);
    let view = viewing_distance(p.pixel_pitch);

    println!("=== {} ===", p.name);
    println!("ID:            {}", p.id);
    println!("Manufacturer:  {} ({})", p.manufacturer, p.model);
    println!(
        "Dimensions:    {}",
        format_dimensions(p.width, p.height, DimensionUnit::Mm)
    );
    println!("Pixel pitch:   {:.2} mm", p.pixel_pitch);
    println!(
        "Resolution:    {} × {} px ({} px total)",
        res.horizontal, res.vertical, res.total_pixels
    );
    println!("Pixel density: {:.0} px/m²", res.pixel_density);
    println!(
        "Viewing:       min {:.1} m, optimal {:.1} m, max {:.1} m",
        view.min_m, view.optimal_m, view.max_m
    );
    println!(
        "Power:         {} @ {:.0} V",
        format_power(p.power_consumption),
        p.input_voltage
    );
    println!("Brightness:    {} nits", p.brightness);
    println!("Refresh rate:  {} Hz", p.refresh_rate);
    println!("Temperature:   {} to {} °C", p.temp_min, p.temp_max);
    println!("IP rating:     {}", p.ip_rating);
    println!("Weight:        {:.1} kg", p.weight);

    if let Some(price) = p.price {
        println!("Price:         {}", format_currency(price, &cfg.currency));
        println!(
            "Price per m²:  {}",
            format_currency(price_per_sqm(p.price, p.width, p.height), &cfg.currency)
        );
    }
    if let Some(desc) = &p.description {
        println!("Description:   {}", desc);
    }
}

fn print_stats(stats: &PanelStats) {
    println!("\n--- Statistics ---");
    println!("Total panels:  {}", stats.total);
    println!("Average pitch: {:.2} mm", stats.average_pitch);
    println!("Total power:   {}", format_power(stats.total_power));
    for (manufacturer, count) in &stats.by_manufacturer {
        println!("  {}: {}", manufacturer, count);
    }
}
