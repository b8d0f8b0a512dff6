//! Removal of a file that is about to be replaced.

use std::path::Path;

use crate::FileOpsError;

/// Removes the file at `path`.
///
/// Directories are not removed; callers only pass paths they found
/// occupied by a previously installed binary.
pub fn remove_existing(path: &Path) -> Result<(), FileOpsError> {
    std::fs::remove_file(path).map_err(|source| FileOpsError::Remove {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "removed existing file");
    Ok(())
}
