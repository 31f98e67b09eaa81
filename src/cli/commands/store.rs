use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Cabinet, Panel, Project};
use crate::store::entity::CatalogEntity;
use crate::store::{document, migrate, open_port};
use crate::ui::messages::{success, warning};

/// Handle the `store` subcommand: document schema migrations, integrity
/// checks and backend information.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Store {
        migrate: do_migrate,
        check,
        info,
    } = cmd
    {
        let mut port = open_port(cfg)?;

        // ---- MIGRATE DOCUMENTS ----
        if *do_migrate {
            let mut migrated = 0usize;
            for key in [Panel::DOC_KEY, Cabinet::DOC_KEY, Project::DOC_KEY] {
                let Some(raw) = port.get(key)? else {
                    continue;
                };

                let value: serde_json::Value = serde_json::from_str(&raw)
                    .map_err(|e| AppError::Storage(format!("malformed document '{}': {}", key, e)))?;

                if migrate::detect_version(&value)? == document::SCHEMA_VERSION {
                    continue;
                }

                let upgraded = migrate::run_pending(value)?;
                port.put(key, &serde_json::to_string_pretty(&upgraded)?)?;
                success(format!(
                    "Document '{}' migrated to schema version {}",
                    key,
                    document::SCHEMA_VERSION
                ));
                migrated += 1;
            }
            if migrated == 0 {
                success("All documents already at the current schema version.");
            }
        }

        // ---- CHECK DOCUMENTS ----
        if *check {
            let mut bad = 0usize;
            bad += check_document::<Panel>(port.as_ref())?;
            bad += check_document::<Cabinet>(port.as_ref())?;
            bad += check_document::<Project>(port.as_ref())?;

            if bad == 0 {
                success("All documents parse at the current schema version.");
            } else {
                warning(format!("{} document(s) failed to parse.", bad));
            }
        }

        // ---- BACKEND INFO ----
        if *info {
            println!("🗄️  Storage: {}", port.describe());
            print_count::<Panel>(port.as_ref())?;
            print_count::<Cabinet>(port.as_ref())?;
            print_count::<Project>(port.as_ref())?;
        }
    }

    Ok(())
}

fn check_document<T: CatalogEntity>(port: &dyn crate::store::StoragePort) -> AppResult<usize> {
    match port.get(T::DOC_KEY)? {
        None => {
            println!("  {}: absent", T::DOC_KEY);
            Ok(0)
        }
        Some(raw) => match document::decode::<T>(&raw) {
            Ok(items) => {
                println!("  {}: ok ({} item(s))", T::DOC_KEY, items.len());
                Ok(0)
            }
            Err(e) => {
                warning(format!("{}: {}", T::DOC_KEY, e));
                Ok(1)
            }
        },
    }
}

fn print_count<T: CatalogEntity>(port: &dyn crate::store::StoragePort) -> AppResult<()> {
    let count = match port.get(T::DOC_KEY)? {
        Some(raw) => document::decode::<T>(&raw).map(|items| items.len()).unwrap_or(0),
        None => 0,
    };
    println!("  {}: {} item(s)", T::DOC_KEY, count);
    Ok(())
}
