//! ledcat library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Store { .. } => cli::commands::store::handle(&cli.command, cfg),
        Commands::Panel { cmd } => cli::commands::panel::handle(cmd, cfg),
        Commands::Cabinet { cmd } => cli::commands::cabinet::handle(cmd, cfg),
        Commands::Project { cmd } => cli::commands::project::handle(cmd, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; command-line overrides win over the file.
    let mut cfg = Config::load();

    if let Some(custom_data) = &cli.data {
        cfg.data_dir = custom_data.clone();
    }
    if let Some(custom_storage) = &cli.storage {
        cfg.storage = custom_storage.clone();
    }

    dispatch(&cli, &cfg)
}
