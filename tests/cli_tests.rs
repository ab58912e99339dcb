use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{backups_in, column_names, setup_db, tm_in};

#[test]
fn test_migrate_with_yes_on_stdin() {
    let (dir, db_path) = setup_db("", 3);
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(contains("Proceed with migration?"))
        .stdout(contains("Backup created"))
        .stdout(contains("Migration completed successfully!"))
        .stdout(contains("idx_tier_complexity"));

    assert_eq!(column_names(&db_path).len(), 5);
    assert_eq!(backups_in(&db_path).len(), 1);
}

#[test]
fn test_migrate_cancelled_by_user() {
    let (dir, db_path) = setup_db("", 1);
    let db = db_path.to_string_lossy().to_string();
    let before = fs::read(&db_path).unwrap();

    tm_in(dir.path())
        .args(["--db", &db, "migrate"])
        .write_stdin("no\n")
        .assert()
        .code(2)
        .stdout(contains("Migration cancelled by user"));

    assert_eq!(fs::read(&db_path).unwrap(), before);
    assert!(backups_in(&db_path).is_empty());
}

#[test]
fn test_migrate_empty_answer_is_cancel() {
    let (dir, db_path) = setup_db("", 0);
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db])
        .write_stdin("\n")
        .assert()
        .code(2);

    assert_eq!(column_names(&db_path), vec!["id"]);
}

#[test]
fn test_migrate_assume_yes_flag_twice() {
    let (dir, db_path) = setup_db(", tier TEXT DEFAULT 'pro'", 0);
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db, "--yes", "migrate"])
        .assert()
        .success()
        .stdout(contains("'tier' column already exists"))
        .stdout(contains("'requires_login' column added"));

    tm_in(dir.path())
        .args(["--db", &db, "-y"])
        .assert()
        .success()
        .stdout(contains("'requires_login' column already exists"))
        .stdout(contains("column added").not());

    assert_eq!(column_names(&db_path).len(), 5);
}

#[test]
fn test_missing_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("database").join("workflows.db");
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db, "--yes"])
        .assert()
        .code(1)
        .stderr(contains("Database not found"));

    assert!(!db_path.exists());
}

#[test]
fn test_schema_command_prints_report() {
    let (dir, db_path) = setup_db(", name TEXT NOT NULL", 0);
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db, "schema"])
        .assert()
        .success()
        .stdout(contains("Current workflows table schema"))
        .stdout(contains("NOT NULL"))
        .stdout(contains("(none)"));

    assert!(backups_in(&db_path).is_empty());
}

#[test]
fn test_verify_command_before_and_after() {
    let (dir, db_path) = setup_db("", 0);
    let db = db_path.to_string_lossy().to_string();

    tm_in(dir.path())
        .args(["--db", &db, "verify"])
        .assert()
        .code(1)
        .stderr(contains("expected 4 columns, found 0"));

    tm_in(dir.path())
        .args(["--db", &db, "--yes"])
        .assert()
        .success();

    tm_in(dir.path())
        .args(["--db", &db, "verify"])
        .assert()
        .success()
        .stdout(contains("All 4 tier columns present"));
}

#[test]
fn test_default_database_path_is_relative() {
    let (dir, db_path) = setup_db("", 0);

    tm_in(dir.path())
        .current_dir(dir.path())
        .arg("--yes")
        .assert()
        .success();

    assert_eq!(column_names(&db_path).len(), 5);
}
