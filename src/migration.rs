//! Migration identity parsing.
//!
//! Migrations are named `V<version>__<name>.sql`; the version orders them and
//! the name (underscores become spaces) labels them in logs and in the
//! `schema_versions` table.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::bundle::BundleItem;
use crate::error::{Error, Result};

/// File name pattern migrations must follow. Prefix and extension are
/// case-insensitive.
static VERSION_AND_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^v(\d+)__(.+)\.sql$").expect("valid pattern"));

/// A migration parsed out of a bundle item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Version parsed from the file name; applied at most once per database.
    pub version: i64,
    /// Display name: the file name remainder with underscores as spaces.
    pub name: String,
    /// Raw SQL body.
    pub sql: String,
}

impl Migration {
    /// Parse one migration from its file name and SQL content.
    ///
    /// Leading zeros in the version are permitted; a version that overflows
    /// `i64` is a parse failure like any other malformed name.
    pub fn parse(file: &str, content: &str) -> Result<Self> {
        let caps = VERSION_AND_NAME
            .captures(file)
            .ok_or_else(|| Error::ParseIdentity { file: file.into() })?;
        let version = caps[1]
            .parse::<i64>()
            .map_err(|_| Error::ParseIdentity { file: file.into() })?;

        Ok(Self {
            version,
            name: caps[2].replace('_', " "),
            sql: content.into(),
        })
    }

    /// Parse every item of a bundle, sorted ascending by version.
    ///
    /// Fails on the first unparsable name and on duplicate versions, before
    /// any statement executes: a malformed or ambiguous bundle must not
    /// partially apply.
    pub fn from_bundle(bundle: &[BundleItem]) -> Result<Vec<Self>> {
        let mut seen = HashSet::with_capacity(bundle.len());
        let mut migrations = Vec::with_capacity(bundle.len());

        for item in bundle {
            let migration = Self::parse(&item.file, &item.content)?;
            if !seen.insert(migration.version) {
                return Err(Error::DuplicateVersion {
                    version: migration.version,
                    file: item.file.clone(),
                });
            }
            migrations.push(migration);
        }

        migrations.sort_by_key(|m| m.version);
        Ok(migrations)
    }
}
