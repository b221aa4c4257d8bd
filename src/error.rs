use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for jellysync operations.
///
/// Every variant is fatal to the run: the pipeline has no local recovery,
/// so errors propagate to `main` unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration document missing or unreadable.
    #[error("cannot read configuration at {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration document malformed or missing a required key.
    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Local media directory missing or unlistable.
    #[error("cannot list media directory {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The SFTP session could not be established or authenticated.
    #[error("cannot establish SFTP session with {host}")]
    Connection {
        host: String,
        #[source]
        source: io::Error,
    },

    /// A single file failed to upload.
    #[error("upload of '{file}' failed")]
    Upload {
        file: String,
        #[source]
        source: io::Error,
    },

    /// A single file could not be moved into the backup directory.
    #[error("cannot move '{file}' into backup")]
    Relocate {
        file: String,
        #[source]
        source: io::Error,
    },
}
