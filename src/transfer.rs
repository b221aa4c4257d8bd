//! SFTP upload of the discovered manifest.

use std::fs::File;
use std::io;
use std::net::TcpStream;
use std::path::{Path, PathBuf};

use ssh2::Session;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppError;

/// Port for pushing a batch of files to the remote media library.
///
/// The production implementation speaks SFTP; tests substitute a recorder.
pub trait MediaUploader {
    /// Upload every name in `files`, resolved against `local_dir`, within
    /// a single remote session.
    fn upload_all(&self, files: &[String], local_dir: &Path) -> Result<(), AppError>;
}

/// `MediaUploader` backed by an SSH session, authenticated with the
/// configured username and private key.
pub struct SftpUploader {
    host: String,
    username: String,
    private_key: PathBuf,
    remote_dir: String,
}

impl SftpUploader {
    const SSH_PORT: u16 = 22;

    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.remote_server.clone(),
            username: config.remote_server_username.clone(),
            private_key: PathBuf::from(&config.remote_server_private_key),
            remote_dir: config.remote_server_movie_dir.clone(),
        }
    }

    /// Open the TCP connection, complete the SSH handshake, and
    /// authenticate. Any failure here aborts the run before a single
    /// file is transferred.
    fn connect(&self) -> Result<Session, AppError> {
        let addr = if self.host.contains(':') {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, Self::SSH_PORT)
        };

        let tcp = TcpStream::connect(&addr)
            .map_err(|source| AppError::Connection { host: addr.clone(), source })?;

        let mut session = Session::new()
            .map_err(|source| AppError::Connection { host: addr.clone(), source: source.into() })?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|source| AppError::Connection { host: addr.clone(), source: source.into() })?;
        session
            .userauth_pubkey_file(&self.username, None, &self.private_key, None)
            .map_err(|source| AppError::Connection { host: addr.clone(), source: source.into() })?;

        Ok(session)
    }

    /// Remote target for one file. The remote side is POSIX-pathed, so
    /// names join with `/` regardless of the local platform.
    fn remote_path(&self, name: &str) -> String {
        format!("{}/{}", self.remote_dir.trim_end_matches('/'), name)
    }
}

impl MediaUploader for SftpUploader {
    fn upload_all(&self, files: &[String], local_dir: &Path) -> Result<(), AppError> {
        // Session and SFTP channel close when dropped, on every exit path.
        let session = self.connect()?;
        info!(host = %self.host, "established connection to media server");

        let sftp = session
            .sftp()
            .map_err(|source| AppError::Connection {
                host: self.host.clone(),
                source: source.into(),
            })?;

        for name in files {
            info!(file = %name, "uploading");

            let mut local = File::open(local_dir.join(name))
                .map_err(|source| AppError::Upload { file: name.clone(), source })?;
            let mut remote = sftp
                .create(Path::new(&self.remote_path(name)))
                .map_err(|source| AppError::Upload { file: name.clone(), source: source.into() })?;
            let bytes = io::copy(&mut local, &mut remote)
                .map_err(|source| AppError::Upload { file: name.clone(), source })?;

            debug!(file = %name, bytes, "upload complete");
        }

        info!(count = files.len(), "files uploaded");
        Ok(())
    }
}
