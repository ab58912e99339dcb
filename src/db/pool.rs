//! SQLite connection wrapper (one connection per migration run).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing database for reading and writing.
    ///
    /// The file is never created: a missing database is reported as
    /// `SourceNotFound` instead of silently producing an empty one.
    pub fn open_existing(path: &Path) -> AppResult<Self> {
        if !path.is_file() {
            return Err(AppError::SourceNotFound(path.to_path_buf()));
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        log::debug!("opened {}", path.display());
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T, E>(&mut self, func: F) -> Result<T, E>
    where
        F: FnOnce(&mut Connection) -> Result<T, E>,
    {
        func(&mut self.conn)
    }
}
