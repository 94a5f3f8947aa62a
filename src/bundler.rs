//! Bundle builder: collects a directory of `.sql` files into `bundle.json`.
//!
//! The bundle is regenerated only when the newest `.sql` modification time
//! differs from the bundle file's own, compared in whole seconds to tolerate
//! filesystem timestamp resolution loss. A regenerated bundle is stamped
//! with the newest source mtime so the next comparison stays meaningful.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::bundle::{self, BundleItem};
use crate::error::{Error, Result};

/// File name of the generated bundle inside the migrations directory.
pub const BUNDLE_FILE_NAME: &str = "bundle.json";

/// Result of a bundle build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleOutcome {
    /// The bundle file was (re)generated at this path.
    Generated(PathBuf),
    /// The bundle file already matches the newest `.sql` file.
    UpToDate,
}

/// Build or refresh `<dir>/bundle.json` from the `.sql` files in `dir`.
///
/// Files are collected in name order; the extension match is
/// case-insensitive. Subdirectories are not scanned.
pub fn build_bundle(dir: &Path) -> Result<BundleOutcome> {
    let meta = fs::metadata(dir).map_err(|_| Error::MissingDir {
        path: dir.display().to_string(),
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.display().to_string(),
        });
    }

    let mut sql_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_sql = Path::new(&name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"));
        if is_sql && entry.file_type()?.is_file() {
            sql_files.push(name);
        }
    }
    sql_files.sort();

    let mut last_modified = 0;
    for name in &sql_files {
        let meta = fs::metadata(dir.join(name))?;
        let mtime = FileTime::from_last_modification_time(&meta).unix_seconds();
        last_modified = last_modified.max(mtime);
    }

    let bundle_path = dir.join(BUNDLE_FILE_NAME);
    let bundle_mtime = fs::metadata(&bundle_path)
        .ok()
        .map(|m| FileTime::from_last_modification_time(&m).unix_seconds());
    if bundle_mtime == Some(last_modified) {
        return Ok(BundleOutcome::UpToDate);
    }

    let items = sql_files
        .iter()
        .map(|name| {
            let content = fs::read_to_string(dir.join(name))?;
            Ok(BundleItem {
                file: name.clone(),
                content,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    bundle::write_bundle(&bundle_path, &items)?;
    filetime::set_file_mtime(&bundle_path, FileTime::from_unix_time(last_modified, 0))?;

    Ok(BundleOutcome::Generated(bundle_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, unix_seconds: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).unwrap();
    }

    #[test]
    fn test_generates_bundle_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("V002__b.sql"), "select 2;").unwrap();
        fs::write(dir.path().join("V001__a.SQL"), "select 1;").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let outcome = build_bundle(dir.path()).unwrap();
        let bundle_path = dir.path().join(BUNDLE_FILE_NAME);
        assert_eq!(outcome, BundleOutcome::Generated(bundle_path.clone()));

        let items = bundle::read_bundle(&bundle_path).unwrap();
        let files: Vec<&str> = items.iter().map(|i| i.file.as_str()).collect();
        assert_eq!(files, ["V001__a.SQL", "V002__b.sql"]);
        assert_eq!(items[1].content, "select 2;");
    }

    #[test]
    fn test_second_build_is_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("V001__a.sql"), "select 1;").unwrap();

        assert!(matches!(
            build_bundle(dir.path()).unwrap(),
            BundleOutcome::Generated(_)
        ));
        assert_eq!(build_bundle(dir.path()).unwrap(), BundleOutcome::UpToDate);
    }

    #[test]
    fn test_rebuilds_when_a_source_changes() {
        let dir = tempfile::tempdir().unwrap();
        let sql = dir.path().join("V001__a.sql");
        fs::write(&sql, "select 1;").unwrap();
        touch(&sql, 1_700_000_000);

        build_bundle(dir.path()).unwrap();
        assert_eq!(build_bundle(dir.path()).unwrap(), BundleOutcome::UpToDate);

        fs::write(&sql, "select 2;").unwrap();
        touch(&sql, 1_700_000_060);
        assert!(matches!(
            build_bundle(dir.path()).unwrap(),
            BundleOutcome::Generated(_)
        ));

        let items = bundle::read_bundle(&dir.path().join(BUNDLE_FILE_NAME)).unwrap();
        assert_eq!(items[0].content, "select 2;");
    }

    #[test]
    fn test_bundle_mtime_is_stamped_to_newest_source() {
        let dir = tempfile::tempdir().unwrap();
        let sql = dir.path().join("V001__a.sql");
        fs::write(&sql, "select 1;").unwrap();
        touch(&sql, 1_700_000_000);

        build_bundle(dir.path()).unwrap();

        let meta = fs::metadata(dir.path().join(BUNDLE_FILE_NAME)).unwrap();
        let stamped = FileTime::from_last_modification_time(&meta).unix_seconds();
        assert_eq!(stamped, 1_700_000_000);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = build_bundle(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::MissingDir { .. }));
        assert!(err.to_string().contains("doesn't exist"));
    }

    #[test]
    fn test_file_path_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("V001__a.sql");
        fs::write(&file, "select 1;").unwrap();

        let err = build_bundle(&file).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
