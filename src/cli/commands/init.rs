use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_port;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory and the selected storage backend
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing ledcat…");

    let mut cfg = Config::init_all(cli.data.clone(), cli.test)?;

    if let Some(storage) = &cli.storage {
        cfg.storage = storage.clone();
    }

    // Opening the port creates whatever the backend needs (directory tree
    // or database file).
    let port = open_port(&cfg)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Storage    : {}", port.describe());
    println!("🎉 ledcat initialization completed!");
    Ok(())
}
