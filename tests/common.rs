#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tiermigrate::config::Config;

pub fn tm() -> Command {
    cargo_bin_cmd!("tiermigrate")
}

/// `tm()` isolated from any user config file.
pub fn tm_in(dir: &Path) -> Command {
    let mut cmd = tm();
    cmd.env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

/// Create `<tmp>/database/workflows.db` with a `workflows` table.
///
/// `extra_columns` are appended verbatim to the `id` column definition.
pub fn setup_db(extra_columns: &str, rows: usize) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_dir = dir.path().join("database");
    fs::create_dir_all(&db_dir).expect("create database dir");
    let db_path = db_dir.join("workflows.db");

    let conn = Connection::open(&db_path).expect("open db");
    conn.execute_batch(&format!(
        "CREATE TABLE workflows (id INTEGER PRIMARY KEY{});",
        extra_columns
    ))
    .expect("create table");
    for _ in 0..rows {
        conn.execute("INSERT INTO workflows DEFAULT VALUES", [])
            .expect("insert row");
    }

    (dir, db_path)
}

pub fn config_for(db_path: &Path) -> Config {
    Config {
        database: db_path.to_string_lossy().to_string(),
        ..Config::default()
    }
}

pub fn column_names(db_path: &Path) -> Vec<String> {
    let conn = Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info('workflows') ORDER BY cid")
        .expect("prepare");
    stmt.query_map([], |r| r.get(0))
        .expect("query")
        .collect::<Result<Vec<String>, _>>()
        .expect("collect")
}

/// Files in the database directory whose name starts with the backup prefix.
pub fn backups_in(db_path: &Path) -> Vec<PathBuf> {
    let dir = db_path.parent().expect("parent");
    let mut out: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read_dir")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().starts_with("workflows_backup_"))
                .unwrap_or(false)
        })
        .collect();
    out.sort();
    out
}
