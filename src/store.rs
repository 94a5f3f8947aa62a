//! Applied-version tracking against the target database.
//!
//! The store owns a single metadata table, created lazily and never dropped:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS "schema_versions" (
//!     version INTEGER PRIMARY KEY,
//!     name    TEXT NOT NULL
//! );
//! ```
//!
//! Rows are inserted once per applied migration, never updated or deleted.
//! Every function takes `&Connection`, so it also works inside a
//! `rusqlite::Transaction` via deref; the runner decides the atomic scopes.

use std::collections::HashSet;

use rusqlite::{Connection, params};

/// Name of the metadata table recording applied migration versions.
pub const VERSIONS_TABLE: &str = "schema_versions";

const CREATE_TABLE_SQL: &str = r#"CREATE TABLE IF NOT EXISTS "schema_versions" (
    version INTEGER PRIMARY KEY,
    name    TEXT NOT NULL
);"#;

/// Create the metadata table if absent. Safe to call on every run.
pub fn ensure_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_TABLE_SQL)
}

/// All currently recorded versions.
pub fn read_applied(conn: &Connection) -> rusqlite::Result<HashSet<i64>> {
    let mut stmt = conn.prepare(r#"SELECT version FROM "schema_versions";"#)?;
    let versions = stmt.query_map([], |row| row.get(0))?;
    versions.collect()
}

/// Whether a version is already recorded.
pub fn is_applied(conn: &Connection, version: i64) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(r#"SELECT version FROM "schema_versions" WHERE version = ?1;"#)?;
    stmt.exists(params![version])
}

/// Record one applied version. Call only inside the migration's transaction,
/// never standalone.
pub fn record(conn: &Connection, version: i64, name: &str) -> rusqlite::Result<()> {
    conn.execute(
        r#"INSERT INTO "schema_versions" (version, name) VALUES (?1, ?2);"#,
        params![version, name],
    )?;
    Ok(())
}
