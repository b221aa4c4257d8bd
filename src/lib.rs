//! jellysync: batch-upload local `.m4v` media to a remote media server
//! over SFTP, then move the uploaded files into a local backup directory.
//!
//! The whole tool is one linear pipeline: load configuration, discover
//! media files, push them over a single SFTP session, relocate them to
//! the backup directory. Any stage error is fatal to the run.

pub mod backup;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod transfer;

use std::path::Path;

use tracing::{debug, info};

pub use config::Config;
pub use error::AppError;
use transfer::{MediaUploader, SftpUploader};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of files pushed to the remote server.
    pub uploaded: usize,
    /// Number of files moved into the backup directory.
    pub relocated: usize,
}

/// Execute one sync run against the production SFTP transport.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    let uploader = SftpUploader::from_config(config);
    run_with_uploader(config, &uploader)
}

/// Pipeline body, generic over the transport so tests can substitute a
/// recording uploader.
///
/// The manifest is computed once and reused unchanged by both the upload
/// and relocation phases. Relocation only runs after the entire upload
/// phase has succeeded; a mid-batch upload failure aborts the run with
/// zero relocations.
pub fn run_with_uploader(
    config: &Config,
    uploader: &dyn MediaUploader,
) -> Result<RunSummary, AppError> {
    debug!(server = %config.remote_server, "remote server address");
    debug!(dir = %config.movie_local_dir, "local media directory");
    debug!(dir = %config.remote_server_movie_dir, "remote media directory");

    let local_dir = Path::new(&config.movie_local_dir);
    let files = discovery::media_files(local_dir)?;
    info!(count = files.len(), "media files to upload");

    if files.is_empty() {
        info!("nothing to upload");
        return Ok(RunSummary { uploaded: 0, relocated: 0 });
    }

    uploader.upload_all(&files, local_dir)?;

    backup::relocate(&files, local_dir, Path::new(&config.backup_dir))?;

    Ok(RunSummary { uploaded: files.len(), relocated: files.len() })
}
