use clap::{Parser, Subcommand};

/// Command-line interface definition for tiermigrate
/// Adds the freemium tier fields to the workflows catalog database
#[derive(Parser)]
#[command(
    name = "tiermigrate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Add freemium tier columns and indexes to the workflows SQLite database",
    long_about = None
)]
pub struct Cli {
    /// Override database path (default: database/workflows.db or the config file value)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Skip the interactive confirmation
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

    /// Defaults to `migrate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Back up the database, then add the missing tier columns and indexes
    Migrate,

    /// Print the current table schema and indexes
    Schema,

    /// Check that all tier columns are present (read-only)
    Verify,
}
