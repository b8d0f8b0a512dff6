//! File operation error types.

use std::io;
use std::path::PathBuf;

/// Errors produced by filesystem operations.
#[derive(Debug, thiserror::Error)]
pub enum FileOpsError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open source file {}: {source}", path.display())]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("failed to create destination file {}: {source}", path.display())]
    CreateDestination { path: PathBuf, source: io::Error },

    #[error("failed to copy file to {}: {source}", path.display())]
    Transfer { path: PathBuf, source: io::Error },

    #[error("failed to remove existing file {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("failed to set executable permissions on {}: {source}", path.display())]
    Permissions { path: PathBuf, source: io::Error },
}

impl FileOpsError {
    /// Returns the path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileOpsError::CreateDir { path, .. }
            | FileOpsError::OpenSource { path, .. }
            | FileOpsError::CreateDestination { path, .. }
            | FileOpsError::Transfer { path, .. }
            | FileOpsError::Remove { path, .. }
            | FileOpsError::Permissions { path, .. } => path,
        }
    }

    /// Returns true if the OS refused the operation for lack of privileges.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            FileOpsError::CreateDir { source, .. }
            | FileOpsError::OpenSource { source, .. }
            | FileOpsError::CreateDestination { source, .. }
            | FileOpsError::Transfer { source, .. }
            | FileOpsError::Remove { source, .. }
            | FileOpsError::Permissions { source, .. } => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
        }
    }
}
