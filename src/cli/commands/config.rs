use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_fields, run_config_migrations};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(&cfg)
                .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_fields()?;
            if missing.is_empty() {
                success("Configuration file is up to date.");
            } else {
                for field in &missing {
                    warning(format!("Missing parameter: '{}'", field));
                }
                println!("Run 'ledcat config --migrate' to add the missing parameters.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            let actions = run_config_migrations()?;
            if actions.is_empty() {
                success("Configuration file already up to date, nothing to migrate.");
            } else {
                for action in &actions {
                    success(format!("Migration applied: {}", action));
                }
            }
        }
    }

    Ok(())
}
