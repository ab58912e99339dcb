//! Unified application error type.
//! Every stage (backup, introspection, mutation, verification) returns
//! AppError so the command layer can report failures and pick an exit code
//! in one place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backup stage
    // ---------------------------
    #[error(
        "Database not found: {}\n   Start the workflow application once to create the database",
        .0.display()
    )]
    SourceNotFound(PathBuf),

    #[error("Backup failed ({}): {source}", .path.display())]
    BackupFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Table '{0}' not found in the database")]
    TableNotFound(String),

    #[error("Migration error on '{object}': {message}")]
    SchemaMutation { object: String, message: String },

    #[error("Migration incomplete: expected {expected} columns, found {found}")]
    VerificationMismatch { expected: usize, found: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
