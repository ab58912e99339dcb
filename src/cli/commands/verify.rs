use crate::config::Config;
use crate::core::verify::verify;
use crate::db::migrate::tier_column_names;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cfg: &Config) -> AppResult<i32> {
    let pool = DbPool::open_existing(&cfg.database_path())?;
    println!("{}▶ Verifying {}…{}", CYAN, cfg.table, RESET);

    let result = verify(&pool.conn, &cfg.table, &tier_column_names())?;
    info(format!("Found columns: {}", result.found.join(", ")));

    if !result.is_complete() {
        info(format!("Missing columns: {}", result.missing().join(", ")));
        return Err(AppError::VerificationMismatch {
            expected: result.expected.len(),
            found: result.found.len(),
        });
    }

    success(format!("All {} tier columns present", result.expected.len()));
    Ok(0)
}
