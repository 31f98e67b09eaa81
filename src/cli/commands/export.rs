use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm_overwrite;
use crate::export::model::{Sheet, cabinet_sheet, panel_sheet, project_sheet};
use crate::export::{ExportEntity, ExportFormat, csv, json, notify_export_success, xlsx};
use crate::models::{Cabinet, Panel, Project};
use crate::store::{CatalogStore, open_port};
use crate::ui::messages::store_banner;
use std::path::Path;

/// Handle the `export` command: dump one catalog collection to CSV, JSON or
/// XLSX.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        entity,
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if !confirm_overwrite(path, *force)? {
            println!("Export cancelled.");
            return Ok(());
        }

        match entity {
            ExportEntity::Panel => {
                let store = open_store::<Panel>(cfg)?;
                export(store.items(), panel_sheet(store.items()), *format, path)?;
            }
            ExportEntity::Cabinet => {
                let store = open_store::<Cabinet>(cfg)?;
                export(store.items(), cabinet_sheet(store.items()), *format, path)?;
            }
            ExportEntity::Project => {
                let store = open_store::<Project>(cfg)?;
                export(store.items(), project_sheet(store.items()), *format, path)?;
            }
        }
    }

    Ok(())
}

fn open_store<T: crate::store::CatalogEntity>(cfg: &Config) -> AppResult<CatalogStore<T>> {
    let port = open_port(cfg)?;
    let store = CatalogStore::<T>::open(port);
    if let Some(err) = store.last_error() {
        store_banner(err);
    }
    Ok(store)
}

fn export<T: serde::Serialize>(
    items: &[T],
    sheet: Sheet,
    format: ExportFormat,
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => {
            csv::write_csv(path, &sheet)?;
            notify_export_success("CSV", path);
        }
        ExportFormat::Json => {
            json::write_json(path, items)?;
            notify_export_success("JSON", path);
        }
        ExportFormat::Xlsx => {
            xlsx::export_xlsx(&sheet, path)?;
        }
    }
    Ok(())
}
