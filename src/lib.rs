//! tiermigrate library root.
//! Exposes the CLI parser, the high-level run() function, and the migration
//! stages (backup, introspection, mutation, verification).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher, returns the process exit code
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<i32> {
    match cli.command.unwrap_or(Commands::Migrate) {
        Commands::Migrate => cli::commands::migrate::handle(cli, cfg),
        Commands::Schema => cli::commands::schema::handle(cfg),
        Commands::Verify => cli::commands::verify::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<i32> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the database path
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    log::debug!("config: {:?}", cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
