//! Error types for the sqlift library.

use thiserror::Error;

/// Errors produced while building/loading bundles and applying migrations.
#[derive(Debug, Error)]
pub enum Error {
    /// Migration file name does not follow `V<digits>__<name>.sql`.
    #[error("cannot parse migration version and name from: {file}")]
    ParseIdentity {
        /// The offending identifier.
        file: String,
    },

    /// Two bundle items resolved to the same version.
    #[error("duplicate migration version {version}: {file}")]
    DuplicateVersion { version: i64, file: String },

    /// A statement inside a migration was rejected by the database.
    ///
    /// The engine-native message is preserved in `source`. The transaction
    /// covering the migration has already been rolled back, so neither its
    /// statements nor its version record persist.
    #[error("migration {version} - {name} failed: {source}")]
    Statement {
        version: i64,
        name: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Database failure outside a migration body (connection, metadata table).
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),

    /// Migrations folder passed to the bundle builder does not exist.
    #[error("migrations folder \"{path}\" doesn't exist")]
    MissingDir { path: String },

    /// Migrations folder passed to the bundle builder is not a directory.
    #[error("\"{path}\" is not a directory")]
    NotADirectory { path: String },

    /// Bundle file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Bundle data is not valid for the bundle format.
    #[error("invalid bundle: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
