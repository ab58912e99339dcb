use crate::errors::{AppError, AppResult};
use crate::utils::path::parent_dir;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database next to itself as `<prefix><YYYYmmdd_HHMMSS>.db`.
    pub fn backup(src: &Path, prefix: &str) -> AppResult<PathBuf> {
        Self::backup_at(src, prefix, Local::now().naive_local())
    }

    /// Same as [`BackupLogic::backup`] with an explicit timestamp.
    pub fn backup_at(src: &Path, prefix: &str, at: NaiveDateTime) -> AppResult<PathBuf> {
        // 1️⃣ Check DB exists
        if !src.is_file() {
            return Err(AppError::SourceNotFound(src.to_path_buf()));
        }

        // 2️⃣ Pick a free name, never overwrite an older backup
        let dest = backup_path(src, prefix, at);

        // 3️⃣ Copy database; a partial copy is removed, a foreign file is not
        if let Err(e) = copy_preserving(src, &dest) {
            if e.kind() != io::ErrorKind::AlreadyExists
                && dest.exists()
                && let Err(rm) = fs::remove_file(&dest)
            {
                log::error!("cannot remove partial backup {}: {}", dest.display(), rm);
            }
            return Err(AppError::BackupFailure {
                path: dest,
                source: e,
            });
        }

        log::info!("backup {} -> {}", src.display(), dest.display());
        Ok(dest)
    }
}

/// First unused backup path for the given timestamp.
pub fn backup_path(src: &Path, prefix: &str, at: NaiveDateTime) -> PathBuf {
    let dir = parent_dir(src);
    let stamp = at.format("%Y%m%d_%H%M%S");

    let mut candidate = dir.join(format!("{}{}.db", prefix, stamp));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{}{}_{}.db", prefix, stamp, n));
        n += 1;
    }
    candidate
}

/// Byte copy that keeps the source's modification time and permissions.
///
/// Permissions are applied last so a read-only source still yields a
/// read-only backup without blocking the mtime update.
fn copy_preserving(src: &Path, dest: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;

    let mut input = File::open(src)?;
    let mut output = OpenOptions::new().write(true).create_new(true).open(dest)?;
    io::copy(&mut input, &mut output)?;
    output.sync_all()?;
    output.set_modified(meta.modified()?)?;
    drop(output);

    fs::set_permissions(dest, meta.permissions())
}
