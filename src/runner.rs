//! Migration execution engine.
//!
//! Applies pending migrations strictly in ascending version order, one
//! transaction per migration: the idempotency guard, the transactional
//! statements, and the version record commit together or not at all.
//! Non-transactional statements execute eagerly before the transaction and
//! their effects survive a later failure of the same migration.

use rusqlite::Connection;

use crate::bundle::BundleItem;
use crate::error::{Error, Result};
use crate::migration::Migration;
use crate::reporter::{LogReporter, Reporter};
use crate::statements::Statements;
use crate::store;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of migrations committed by this run.
    pub applied_count: usize,
    /// Versions committed by this run, ascending.
    pub applied_versions: Vec<i64>,
}

/// Run a bundle with the default tracing-backed reporter.
pub fn run(conn: &mut Connection, bundle: &[BundleItem]) -> Result<RunSummary> {
    run_bundle(conn, bundle, &LogReporter)
}

/// Run a bundle against a live database.
///
/// The connection is borrowed mutably for the whole run: the engine assumes
/// exclusive use and applies migrations sequentially. On error the failing
/// migration's transaction has been rolled back and later migrations were
/// not attempted; migrations committed earlier in the run stay applied, so
/// re-invoking after fixing the cause resumes at the failed version.
pub fn run_bundle(
    conn: &mut Connection,
    bundle: &[BundleItem],
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    match try_run(conn, bundle, reporter) {
        Ok(summary) => {
            reporter.finished(summary.applied_count);
            Ok(summary)
        }
        Err(error) => {
            reporter.failed(&error);
            Err(error)
        }
    }
}

fn try_run(
    conn: &mut Connection,
    bundle: &[BundleItem],
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    // Identity failures abort before any statement executes, including the
    // metadata table creation.
    let migrations = Migration::from_bundle(bundle)?;

    // Table creation and the first read share one atomic scope.
    let applied = {
        let tx = conn.transaction()?;
        store::ensure_table(&tx)?;
        let applied = store::read_applied(&tx)?;
        tx.commit()?;
        applied
    };

    let mut summary = RunSummary::default();
    for migration in migrations.iter().filter(|m| !applied.contains(&m.version)) {
        if apply(conn, migration, reporter)? {
            summary.applied_count += 1;
            summary.applied_versions.push(migration.version);
        }
    }

    Ok(summary)
}

/// Apply one migration. Returns `false` when the in-transaction guard finds
/// the version already recorded.
fn apply(conn: &mut Connection, migration: &Migration, reporter: &dyn Reporter) -> Result<bool> {
    let statements = Statements::split(&migration.sql);

    // Marked statements run outside the transaction, unconditionally: a
    // later failure does not undo them. execute_batch tolerates statements
    // that return rows (PRAGMA).
    for statement in &statements.non_transactional {
        conn.execute_batch(statement)
            .map_err(|source| statement_error(migration, source))?;
    }

    let tx = conn.transaction()?;
    // Guard re-checked inside the transaction, in case this pending set and
    // the recorded state disagree.
    if store::is_applied(&tx, migration.version)? {
        return Ok(false);
    }

    reporter.migrating(migration.version, &migration.name);
    for statement in &statements.transactional {
        // A failed statement drops `tx`, rolling back the whole migration.
        tx.execute_batch(statement)
            .map_err(|source| statement_error(migration, source))?;
    }
    store::record(&tx, migration.version, &migration.name)?;
    tx.commit()?;

    Ok(true)
}

fn statement_error(migration: &Migration, source: rusqlite::Error) -> Error {
    Error::Statement {
        version: migration.version,
        name: migration.name.clone(),
        source,
    }
}
