//! Run configuration loaded from `fileinfo.json`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

/// Name of the configuration document, resolved against the working directory.
pub const CONFIG_FILE: &str = "fileinfo.json";

/// Connection and directory settings for one sync run.
///
/// All six fields are required and have no defaults; deserialization fails
/// on a missing key, so a bad document is rejected before any filesystem
/// or network work happens.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address of the remote media server.
    pub remote_server: String,
    /// Path to the private key used to authenticate the SFTP session.
    pub remote_server_private_key: String,
    /// Local directory scanned for media files.
    pub movie_local_dir: String,
    /// Directory on the remote server that receives the uploads.
    pub remote_server_movie_dir: String,
    /// Username for the SFTP session.
    pub remote_server_username: String,
    /// Local directory that uploaded files are moved into.
    pub backup_dir: String,
}

impl Config {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|source| AppError::ConfigRead { path: path.to_path_buf(), source })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `fileinfo.json` in the working directory.
    pub fn load_default() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL_DOC: &str = r#"{
        "remote_server": "198.51.100.7",
        "remote_server_private_key": "/home/op/.ssh/id_ed25519",
        "movie_local_dir": "/srv/staging/movies",
        "remote_server_movie_dir": "/media/movies",
        "remote_server_username": "op",
        "backup_dir": "/srv/uploaded"
    }"#;

    #[test]
    fn load_parses_all_fields() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, FULL_DOC).unwrap();

        let config = Config::load(&path).expect("load should succeed");
        assert_eq!(config.remote_server, "198.51.100.7");
        assert_eq!(config.remote_server_username, "op");
        assert_eq!(config.backup_dir, "/srv/uploaded");
    }

    #[test]
    fn load_fails_on_missing_key() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"remote_server": "198.51.100.7"}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json at all").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }
}
