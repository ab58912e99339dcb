use crate::db::schema::{ColumnDescriptor, IndexDescriptor, list_columns, list_indexes};
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use rusqlite::Connection;
use std::fmt;

/// Which of the expected columns the table actually has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub expected: Vec<String>,
    /// Expected columns found, in expected order.
    pub found: Vec<String>,
}

impl VerificationResult {
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.expected.len()
    }

    pub fn missing(&self) -> Vec<&str> {
        self.expected
            .iter()
            .filter(|e| !self.found.contains(*e))
            .map(String::as_str)
            .collect()
    }
}

/// Intersect the table's columns with `expected`; unrelated columns are ignored.
///
/// Names compare ASCII case-insensitively, like SQLite identifiers.
pub fn verify(conn: &Connection, table: &str, expected: &[&str]) -> AppResult<VerificationResult> {
    let actual = list_columns(conn, table)?;

    let mut wanted: Vec<String> = Vec::with_capacity(expected.len());
    for name in expected {
        if !wanted.iter().any(|w| w.eq_ignore_ascii_case(name)) {
            wanted.push(name.to_string());
        }
    }

    let found = wanted
        .iter()
        .filter(|w| actual.iter().any(|c| c.name.eq_ignore_ascii_case(w)))
        .cloned()
        .collect();

    Ok(VerificationResult {
        expected: wanted,
        found,
    })
}

/// Snapshot of a table's columns and user-created indexes.
#[derive(Debug, Clone)]
pub struct SchemaReport {
    pub table: String,
    pub columns: Vec<ColumnDescriptor>,
    pub indexes: Vec<IndexDescriptor>,
}

impl SchemaReport {
    pub fn has_index(&self, name: &str) -> bool {
        self.indexes.iter().any(|i| i.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}

pub fn schema_report(conn: &Connection, table: &str) -> AppResult<SchemaReport> {
    Ok(SchemaReport {
        table: table.to_string(),
        columns: list_columns(conn, table)?,
        indexes: list_indexes(conn, table)?,
    })
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(80);

        writeln!(f, "📋 Current {} table schema:", self.table)?;
        writeln!(f, "{}", rule)?;

        if self.columns.is_empty() {
            writeln!(f, "  (table not found)")?;
        } else {
            let mut table = Table::new(vec![
                Column::new("NAME", 25),
                Column::new("TYPE", 15),
                Column::new("NULL", 10),
                Column::new("PK", 5),
                Column::new("DEFAULT", 0),
            ]);
            for c in &self.columns {
                table.add_row(vec![
                    c.name.clone(),
                    c.decl_type.clone(),
                    if c.not_null { "NOT NULL" } else { "" }.to_string(),
                    if c.primary_key { "PK" } else { "" }.to_string(),
                    c.default_value.clone().unwrap_or_default(),
                ]);
            }
            write!(f, "{}", table.render())?;
        }
        writeln!(f, "{}", rule)?;

        writeln!(f)?;
        writeln!(f, "🔍 Indexes:")?;
        if self.indexes.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for idx in &self.indexes {
            writeln!(f, "  {}", idx.name)?;
        }

        Ok(())
    }
}
