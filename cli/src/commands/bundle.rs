//! Bundle command implementation.
//!
//! Collects a migrations directory into `bundle.json`, skipping the write
//! when the bundle already matches the newest `.sql` file.

use std::path::Path;

use sqlift::BundleOutcome;

use crate::error::CliError;
use crate::output;

/// Run the bundle command.
pub fn run(dir: &Path) -> Result<(), CliError> {
    match sqlift::build_bundle(dir)? {
        BundleOutcome::Generated(path) => {
            println!(
                "{} {}",
                output::success("Generated SQL bundle file:"),
                path.display()
            );
        }
        BundleOutcome::UpToDate => {
            println!(
                "{}",
                output::muted("Nothing to generate, SQL bundle is up to date!")
            );
        }
    }

    Ok(())
}
