//! Migrate command implementation.
//!
//! Loads a bundle file and applies its pending migrations to the database.

use std::path::Path;

use sqlift::{Error, Reporter};

use crate::commands::{open_database, resolve_bundle_path};
use crate::error::CliError;
use crate::output;

/// Prints the runner's log-line contract to stdout so downstream consumers
/// can pipe it; failures go to stderr.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn migrating(&self, version: i64, name: &str) {
        println!("migrating to version {version} - {name}");
    }

    fn finished(&self, applied: usize) {
        if applied > 0 {
            println!("{applied} migration(s) were applied successfully");
        } else {
            println!("DB is up to date");
        }
    }

    fn failed(&self, error: &Error) {
        eprintln!("{}", output::error(&format!("DB: {error}")));
    }
}

/// Run the migrate command.
pub fn run(db_path: &Path, bundle_path: &Path) -> Result<(), CliError> {
    let bundle_path = resolve_bundle_path(bundle_path);
    let bundle = sqlift::read_bundle(&bundle_path)?;

    let mut conn = open_database(db_path)?;
    sqlift::run_bundle(&mut conn, &bundle, &ConsoleReporter)?;

    Ok(())
}
