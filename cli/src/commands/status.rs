//! Status command implementation.
//!
//! Shows applied vs pending versions without executing anything.

use std::path::Path;

use colored::Colorize;

use sqlift::{Migration, store};

use crate::commands::{open_database, resolve_bundle_path};
use crate::error::CliError;
use crate::output;

/// Run the status command.
pub fn run(db_path: &Path, bundle_path: &Path) -> Result<(), CliError> {
    let bundle_path = resolve_bundle_path(bundle_path);
    let bundle = sqlift::read_bundle(&bundle_path)?;
    let migrations = Migration::from_bundle(&bundle)?;

    let conn = open_database(db_path)?;
    // The metadata table may not exist yet on a fresh database; status must
    // not create it.
    let applied = store::read_applied(&conn).unwrap_or_default();

    println!("{}", output::heading("Migration Status"));
    println!();

    if migrations.is_empty() {
        println!("  {}", output::warning("No migrations in bundle."));
        return Ok(());
    }

    let mut pending = 0;
    for migration in &migrations {
        let icon = if applied.contains(&migration.version) {
            "✓".green()
        } else {
            pending += 1;
            "○".yellow()
        };
        println!(
            "  {} {} {}",
            icon,
            output::muted(&format!("V{:03}", migration.version)),
            migration.name
        );
    }

    println!();
    if pending == 0 {
        println!("  {}", output::success("DB is up to date"));
    } else {
        println!("  {pending} pending migration(s)");
    }

    Ok(())
}
