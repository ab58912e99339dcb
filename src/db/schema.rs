//! Read-only schema introspection on top of SQLite's pragma table functions.

use rusqlite::{Connection, OptionalExtension, Result};

/// One row of `pragma_table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub cid: i64,
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    /// Default as SQL text (`'pro'`, `1`), `None` when the column has none.
    pub default_value: Option<String>,
    pub primary_key: bool,
}

/// A user-created index (automatic indexes have no SQL and are skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    pub name: String,
    pub sql: String,
}

/// Check if the table exists.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// List the columns of `table` in declaration order.
///
/// An unknown table yields an empty list.
pub fn list_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnDescriptor>> {
    let mut stmt = conn.prepare(
        "SELECT cid, name, type, \"notnull\", dflt_value, pk
         FROM pragma_table_info(?1)
         ORDER BY cid",
    )?;

    let rows = stmt.query_map([table], |row| {
        Ok(ColumnDescriptor {
            cid: row.get(0)?,
            name: row.get(1)?,
            decl_type: row.get(2)?,
            not_null: row.get::<_, i64>(3)? != 0,
            default_value: row.get(4)?,
            primary_key: row.get::<_, i64>(5)? != 0,
        })
    })?;

    rows.collect()
}

/// Check if `table` has a column named `column` (ASCII case-insensitive, as SQLite).
pub fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2 COLLATE NOCASE")?;
    let found: Option<i64> = stmt
        .query_row([table, column], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

/// List non-automatic indexes defined on `table`.
pub fn list_indexes(conn: &Connection, table: &str) -> Result<Vec<IndexDescriptor>> {
    let mut stmt = conn.prepare(
        "SELECT name, sql FROM sqlite_master
         WHERE type='index' AND tbl_name=?1 AND sql IS NOT NULL
         ORDER BY name",
    )?;

    let rows = stmt.query_map([table], |row| {
        Ok(IndexDescriptor {
            name: row.get(0)?,
            sql: row.get(1)?,
        })
    })?;

    rows.collect()
}

/// Quote an identifier for direct use in DDL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
