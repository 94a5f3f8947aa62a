//! Bundle data model and JSON persistence.
//!
//! A bundle is the unit handed to the migration runner: a JSON array of
//! `{ "file": ..., "content": ... }` objects collected from a directory of
//! `.sql` files. Bundle order carries no meaning; the runner orders
//! migrations by the version parsed from each file name.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One migration file captured in a bundle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BundleItem {
    /// File name the migration identity is parsed from (e.g. `V001__init.sql`).
    pub file: String,
    /// Raw SQL text.
    pub content: String,
}

impl BundleItem {
    pub fn new(file: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            content: content.into(),
        }
    }
}

/// Read a bundle from a JSON file.
pub fn read_bundle(path: &Path) -> Result<Vec<BundleItem>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Serialize a bundle as pretty-printed JSON (2-space indentation).
pub fn to_json(bundle: &[BundleItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Write a bundle to a JSON file, pretty-printed for human review.
pub fn write_bundle(path: &Path, bundle: &[BundleItem]) -> Result<()> {
    std::fs::write(path, to_json(bundle)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_is_a_json_array() {
        let json = r#"[
  {
    "file": "V001__init.sql",
    "content": "create table t (id integer primary key);"
  }
]"#;
        let bundle: Vec<BundleItem> = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle[0].file, "V001__init.sql");

        let out = to_json(&bundle).unwrap();
        assert_eq!(out, json);
    }

    #[test]
    fn test_rejects_non_bundle_json() {
        let err = serde_json::from_str::<Vec<BundleItem>>(r#"{"file": "x"}"#);
        assert!(err.is_err());
    }
}
