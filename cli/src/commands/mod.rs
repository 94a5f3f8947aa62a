//! CLI subcommand implementations.

pub mod bundle;
pub mod migrate;
pub mod status;

use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Open the target SQLite database.
pub(crate) fn open_database(path: &Path) -> Result<rusqlite::Connection, CliError> {
    rusqlite::Connection::open(path).map_err(|source| CliError::OpenDatabase {
        path: path.display().to_string(),
        source,
    })
}

/// Accept either a bundle file or a migrations directory containing one.
pub(crate) fn resolve_bundle_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(sqlift::BUNDLE_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}
