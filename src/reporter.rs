//! Progress reporting seam for the migration runner.
//!
//! The runner reports through a [`Reporter`] handed in by the caller instead
//! of writing to a global logger, so embedders and tests decide where the
//! human-observable lines go. [`LogReporter`] is the default and emits the
//! exact line format downstream log consumers expect.

use crate::error::Error;

/// Observer for migration progress.
pub trait Reporter {
    /// A migration is about to apply its transactional statements.
    fn migrating(&self, version: i64, name: &str);

    /// The run finished without error after committing `applied` migrations.
    fn finished(&self, applied: usize);

    /// The run failed. The same error is returned to the caller; this hook
    /// exists so the failure is observable in logs even when the caller
    /// discards the result.
    fn failed(&self, error: &Error);
}

/// Default reporter emitting the log-line contract through [`tracing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn migrating(&self, version: i64, name: &str) {
        tracing::info!("migrating to version {version} - {name}");
    }

    fn finished(&self, applied: usize) {
        if applied > 0 {
            tracing::info!("{applied} migration(s) were applied successfully");
        } else {
            tracing::info!("DB is up to date");
        }
    }

    fn failed(&self, error: &Error) {
        tracing::error!("DB: {error}");
    }
}
