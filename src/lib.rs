//! # sqlift
//!
//! Versioned SQL migration runner for SQLite.
//!
//! Migrations are plain `.sql` files named `V<version>__<name>.sql`,
//! collected into a JSON bundle and applied exactly once each, in ascending
//! version order regardless of bundle order. Applied versions are recorded
//! in a `schema_versions` table; each migration's statements and its version
//! record commit in one transaction, so a failure leaves either all of a
//! migration or none of it, and a rerun resumes at the failed version.
//!
//! ## Quick start
//!
//! ```no_run
//! use rusqlite::Connection;
//!
//! # fn main() -> sqlift::Result<()> {
//! let mut conn = Connection::open("app.db")?;
//! let bundle = sqlift::read_bundle("migrations/bundle.json".as_ref())?;
//! let summary = sqlift::run(&mut conn, &bundle)?;
//! println!("applied {} migration(s)", summary.applied_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Non-transactional statements
//!
//! Statements that cannot run inside a transaction (PRAGMAs, some DDL) opt
//! out with a `-- non-transactional` comment line. They execute eagerly,
//! before the migration's transaction, and their effects survive a failure
//! of the rest of the migration — so they should be idempotent or safe to
//! apply early:
//!
//! ```sql
//! -- non-transactional
//! PRAGMA foreign_keys = ON;
//!
//! CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
//! ```
//!
//! ## Bundles
//!
//! A bundle is a JSON array of `{ "file", "content" }` objects, usually
//! produced by [`build_bundle`] from a directory of `.sql` files (the
//! `sqlift bundle` CLI command wraps it). The bundle file is only rewritten
//! when a source file's modification time changed.

pub mod bundle;
pub mod bundler;
pub mod error;
pub mod migration;
pub mod reporter;
pub mod runner;
pub mod statements;
pub mod store;

pub use bundle::{BundleItem, read_bundle, write_bundle};
pub use bundler::{BUNDLE_FILE_NAME, BundleOutcome, build_bundle};
pub use error::{Error, Result};
pub use migration::Migration;
pub use reporter::{LogReporter, Reporter};
pub use runner::{RunSummary, run, run_bundle};
pub use statements::{NON_TRANSACTIONAL_MARKER, Statements};
