//! Source directory scan for uploadable media files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;

/// File extension that marks a directory entry as uploadable media.
pub const MEDIA_SUFFIX: &str = ".m4v";

/// List the bare names of media files in `dir`.
///
/// Subdirectories and entries without the media suffix are silently
/// skipped. Names are sorted so runs are deterministic. The result is a
/// snapshot; the directory is not re-read later in the run.
pub fn media_files(dir: &Path) -> Result<Vec<String>, AppError> {
    let entries = fs::read_dir(dir)
        .map_err(|source| AppError::Discovery { path: dir.to_path_buf(), source })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|source| AppError::Discovery { path: dir.to_path_buf(), source })?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(MEDIA_SUFFIX) {
            debug!(file = %name, "queued media file");
            files.push(name);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn returns_only_media_suffix_names() {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::write(dir.path().join("movie2.m4v"), b"b").unwrap();
        fs::write(dir.path().join("movie1.m4v"), b"a").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        fs::create_dir(dir.path().join("extras.m4v")).unwrap();

        let files = media_files(dir.path()).expect("scan should succeed");
        assert_eq!(files, vec!["movie1.m4v", "movie2.m4v"]);
    }

    #[test]
    fn empty_directory_yields_empty_manifest() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let files = media_files(dir.path()).expect("scan should succeed");
        assert!(files.is_empty());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let err = media_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, AppError::Discovery { .. }));
    }
}
