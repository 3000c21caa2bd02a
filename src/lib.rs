//! refectory library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules: store boundary, row mapping/validation, cache, reconciliation
//! and aggregation engines.

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod sheet;
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
        Commands::Scan { .. } => cli::commands::scan::handle(cli, cfg),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg),
        Commands::Meals { .. } => cli::commands::meals::handle(cli, cfg),
        Commands::Mealtime { .. } => cli::commands::mealtime::handle(cli, cfg),
        Commands::Collaborators { .. } => cli::commands::collaborators::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init();

    let mut cfg = Config::load()?;

    // apply store-dir override from the command line
    if let Some(custom_store) = &cli.store {
        cfg.store_dir = custom_store.clone();
    }

    dispatch(&cli, &cfg)
}
