//! Post-upload relocation of source files into the backup directory.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::AppError;

/// Move every name in `files` from `source_dir` into `backup_dir`.
///
/// The backup directory is created if absent. Moves are destructive; a
/// failure part-way leaves earlier moves in place, and the remaining
/// files stay in the source directory.
pub fn relocate(files: &[String], source_dir: &Path, backup_dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(backup_dir)?;

    for name in files {
        let from = source_dir.join(name);
        let to = backup_dir.join(name);
        move_file(&from, &to)
            .map_err(|source| AppError::Relocate { file: name.clone(), source })?;
        debug!(file = %name, "moved to backup");
    }

    info!(count = files.len(), backup = %backup_dir.display(), "relocation complete");
    Ok(())
}

/// Rename, falling back to copy + remove when the backup directory sits
/// on a different filesystem.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
