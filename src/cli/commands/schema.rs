use crate::config::Config;
use crate::core::verify::schema_report;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<i32> {
    let pool = DbPool::open_existing(&cfg.database_path())?;
    let report = schema_report(&pool.conn, &cfg.table)?;
    println!("{}", report);
    Ok(0)
}
