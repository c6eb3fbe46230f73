//! rexpense library root.
//! Exposes the CLI parser, the high-level run() function and the
//! workbook, model and tracker modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sheets;
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
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg),
        Commands::Fuel { .. } => cli::commands::fuel::handle(&cli.command, cfg),
        Commands::Budget => cli::commands::budget::handle(cfg),
        Commands::EditBudget { .. } => cli::commands::edit_budget::handle(&cli.command, cfg),
        Commands::Shell => cli::commands::shell::handle(cfg),
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the configured level.
fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    init_logging(&cfg);

    // --db wins over the configured workbook
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
