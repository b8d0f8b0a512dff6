//! Destination directory preparation and executable permissions.

use std::path::Path;

use crate::FileOpsError;

/// Ensures `path` exists as a directory, creating missing parents.
///
/// Newly created directories get mode `0755` (subject to the umask) on Unix.
/// Existing directories are left untouched.
pub fn ensure_dir(path: &Path) -> Result<(), FileOpsError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::EXECUTABLE_MODE);
    }

    builder.create(path).map_err(|source| FileOpsError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "destination directory ready");
    Ok(())
}

/// Sets a file as executable (Unix only, 755).
pub fn set_executable(path: &Path) -> Result<(), FileOpsError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(crate::EXECUTABLE_MODE))
            .map_err(|source| FileOpsError::Permissions {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "set mode 755");
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
