use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::verify::{SchemaReport, VerificationResult, schema_report, verify};
use crate::db::migrate::{
    MigrationOutcome, TIER_COLUMNS, apply_migration, tier_column_names, tier_indexes,
};
use crate::db::pool::DbPool;
use crate::db::schema::table_exists;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use std::path::PathBuf;

/// How a migration run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The operator declined; nothing was touched.
    Cancelled,
    /// All target columns are present.
    Completed {
        backup: PathBuf,
        outcome: MigrationOutcome,
        verification: VerificationResult,
    },
    /// Mutation finished but verification found fewer columns than expected.
    Incomplete {
        backup: PathBuf,
        outcome: MigrationOutcome,
        verification: VerificationResult,
    },
}

impl RunOutcome {
    /// 0 = completed, 1 = incomplete, 2 = cancelled.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::Incomplete { .. } => 1,
            RunOutcome::Cancelled => 2,
        }
    }
}

pub struct MigrationLogic;

impl MigrationLogic {
    /// Show schema, ask, then backup → mutate → verify.
    ///
    /// `confirm` receives the current schema and decides whether to proceed.
    pub fn run<F>(cfg: &Config, confirm: F) -> AppResult<RunOutcome>
    where
        F: FnOnce(&SchemaReport) -> AppResult<bool>,
    {
        let db_path = cfg.database_path();

        // 1️⃣ Current schema (read-only)
        let before = {
            let pool = DbPool::open_existing(&db_path)?;
            schema_report(&pool.conn, &cfg.table)?
        };
        println!("{}", before);

        // 2️⃣ Confirmation gate
        if !confirm(&before)? {
            warning("Migration cancelled by user");
            return Ok(RunOutcome::Cancelled);
        }

        // 3️⃣ Backup before any mutation
        let backup = BackupLogic::backup(&db_path, &cfg.backup_prefix)?;
        success(format!("📦 Backup created: {}", backup.display()));

        // 4️⃣ Mutation
        info("🔄 Starting database migration...");
        let mut pool = DbPool::open_existing(&db_path)?;
        if !table_exists(&pool.conn, &cfg.table)? {
            return Err(AppError::TableNotFound(cfg.table.clone()));
        }
        let outcome = apply_migration(&mut pool, &cfg.table, &TIER_COLUMNS, &tier_indexes())?;

        // 5️⃣ Verification
        info("📊 Verifying schema...");
        let verification = verify(&pool.conn, &cfg.table, &tier_column_names())?;
        info(format!("Found columns: {}", verification.found.join(", ")));

        let after = schema_report(&pool.conn, &cfg.table)?;
        drop(pool);

        if verification.is_complete() {
            success("Migration completed successfully!");
            print_next_steps();
            header("Resulting schema");
            println!("{}", after);
            Ok(RunOutcome::Completed {
                backup,
                outcome,
                verification,
            })
        } else {
            warning(AppError::VerificationMismatch {
                expected: verification.expected.len(),
                found: verification.found.len(),
            });
            Ok(RunOutcome::Incomplete {
                backup,
                outcome,
                verification,
            })
        }
    }
}

fn print_next_steps() {
    println!();
    println!("📋 Next steps:");
    println!("  1. Update the catalog queries to read the new tier columns");
    println!("  2. Tag the workflows that belong to the free tier");
    println!("  3. Reindex the catalog so the new fields are served");
}
