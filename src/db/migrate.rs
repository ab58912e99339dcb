use crate::db::pool::DbPool;
use crate::db::schema::{column_exists, list_columns, quote_ident};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// Declared type of an added column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    /// Stored as INTEGER 0/1.
    Boolean,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Boolean => "BOOLEAN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Bool(bool),
}

impl DefaultValue {
    /// SQL literal, as it will later appear in `pragma_table_info.dflt_value`.
    pub fn as_sql(&self) -> String {
        match self {
            DefaultValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            DefaultValue::Bool(b) => u8::from(*b).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub default: DefaultValue,
}

impl ColumnSpec {
    pub fn add_column_sql(&self, table: &str) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {} {} DEFAULT {}",
            quote_ident(table),
            quote_ident(self.name),
            self.sql_type.as_sql(),
            self.default.as_sql()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: String,
    pub column: &'static str,
}

impl IndexSpec {
    /// Index named `idx_<column>`.
    pub fn for_column(column: &'static str) -> Self {
        Self {
            name: format!("idx_{}", column),
            column,
        }
    }

    pub fn create_sql(&self, table: &str) -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS {} ON {}({})",
            quote_ident(&self.name),
            quote_ident(table),
            quote_ident(self.column)
        )
    }
}

/// Freemium tier fields, in the order they are applied.
pub const TIER_COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec {
        name: "tier",
        sql_type: SqlType::Text,
        default: DefaultValue::Text("pro"),
    },
    ColumnSpec {
        name: "tier_complexity",
        sql_type: SqlType::Text,
        default: DefaultValue::Text("intermediate"),
    },
    ColumnSpec {
        name: "is_lead_magnet",
        sql_type: SqlType::Boolean,
        default: DefaultValue::Bool(false),
    },
    ColumnSpec {
        name: "requires_login",
        sql_type: SqlType::Boolean,
        default: DefaultValue::Bool(true),
    },
];

pub const INDEXED_COLUMNS: [&str; 3] = ["tier", "tier_complexity", "is_lead_magnet"];

pub fn tier_indexes() -> Vec<IndexSpec> {
    INDEXED_COLUMNS
        .into_iter()
        .map(IndexSpec::for_column)
        .collect()
}

pub fn tier_column_names() -> Vec<&'static str> {
    TIER_COLUMNS.iter().map(|c| c.name).collect()
}

/// What a migration run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
    pub indexes: Vec<String>,
    /// Requested columns present after the run, in declaration order.
    pub present: Vec<String>,
}

/// Add the missing columns, then ensure the indexes.
///
/// Each phase runs in its own transaction and is committed as a checkpoint.
/// When a column statement fails, the columns added before it are still
/// committed: every addition is guarded, so a later run resumes where this
/// one stopped.
pub fn apply_migration(
    pool: &mut DbPool,
    table: &str,
    specs: &[ColumnSpec],
    indexes: &[IndexSpec],
) -> AppResult<MigrationOutcome> {
    let mut outcome = MigrationOutcome::default();

    pool.with_conn(|conn| add_columns(conn, table, specs, &mut outcome))?;
    log::info!("checkpoint: columns committed");

    pool.with_conn(|conn| create_indexes(conn, table, indexes, &mut outcome))?;
    log::info!("checkpoint: indexes committed");

    let actual = list_columns(&pool.conn, table)?;
    outcome.present = specs
        .iter()
        .filter(|s| actual.iter().any(|c| c.name.eq_ignore_ascii_case(s.name)))
        .map(|s| s.name.to_string())
        .collect();

    Ok(outcome)
}

fn add_columns(
    conn: &mut Connection,
    table: &str,
    specs: &[ColumnSpec],
    outcome: &mut MigrationOutcome,
) -> AppResult<()> {
    let tx = conn.transaction()?;

    for spec in specs {
        if column_exists(&tx, table, spec.name)? {
            info(format!("'{}' column already exists", spec.name));
            outcome.skipped.push(spec.name.to_string());
            continue;
        }

        warning(format!("Adding '{}' column...", spec.name));
        let sql = spec.add_column_sql(table);
        log::debug!("{}", sql);

        if let Err(e) = tx.execute(&sql, []) {
            // keep what was already added in this run
            if let Err(commit_err) = tx.commit() {
                log::error!("commit after failed ALTER: {}", commit_err);
            }
            return Err(AppError::SchemaMutation {
                object: spec.name.to_string(),
                message: e.to_string(),
            });
        }

        success(format!("'{}' column added", spec.name));
        outcome.added.push(spec.name.to_string());
    }

    tx.commit()?;
    Ok(())
}

fn create_indexes(
    conn: &mut Connection,
    table: &str,
    indexes: &[IndexSpec],
    outcome: &mut MigrationOutcome,
) -> AppResult<()> {
    let tx = conn.transaction()?;

    for index in indexes {
        info(format!("Creating index on '{}' column...", index.column));
        let sql = index.create_sql(table);
        log::debug!("{}", sql);

        tx.execute(&sql, []).map_err(|e| AppError::SchemaMutation {
            object: index.name.clone(),
            message: e.to_string(),
        })?;

        success(format!("Index {} ready", index.name));
        outcome.indexes.push(index.name.clone());
    }

    tx.commit()?;
    Ok(())
}
