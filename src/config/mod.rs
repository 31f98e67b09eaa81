use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Storage backend: "json" (one file per entity) or "sqlite".
    pub storage: String,
    /// Directory holding the persisted catalog documents.
    pub data_dir: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

pub fn default_storage() -> String {
    "json".to_string()
}

pub fn default_currency() -> String {
    "BRL".to_string()
}

pub fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            currency: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ledcat")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ledcat")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ledcat.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A config file that fails to parse falls back to defaults with a
    /// warning instead of aborting.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        warning(format!("Failed to parse {}: {}", path.display(), e));
                        Config::default()
                    }
                },
                Err(e) => {
                    warning(format!("Failed to read {}: {}", path.display(), e));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration file and data directory.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_data_dir {
            Some(d) => {
                if is_absolute(&d) {
                    PathBuf::from(&d)
                } else {
                    dir.join(&d)
                }
            }
            None => dir.clone(),
        };
        fs::create_dir_all(&data_dir)?;

        let config = Config {
            storage: default_storage(),
            data_dir: data_dir.to_string_lossy().to_string(),
            currency: default_currency(),
            date_format: default_date_format(),
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
