//! Error types for the CLI.

use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bundle or migration failure from the library.
    #[error(transparent)]
    Migration(#[from] sqlift::Error),

    /// Failed to open the target database.
    #[error("failed to open database '{path}': {source}")]
    OpenDatabase {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
}
