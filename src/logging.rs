//! Process-wide logging setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;

use crate::error::AppError;

/// Default log destination, resolved against the working directory.
pub const LOG_FILE: &str = "upload.log";

/// Install the global subscriber: timestamped, leveled lines appended to
/// `path`. Level and destination are explicit arguments rather than
/// ambient state; `main` calls this exactly once at startup.
pub fn init(level: LevelFilter, path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
