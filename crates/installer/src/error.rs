//! Install error types.

use std::io;
use std::path::PathBuf;

use movebin_file_ops::FileOpsError;
use movebin_platform::PlatformError;

/// Errors that abort an install. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot resolve source path {}: {source}", path.display())]
    ResolvePath { path: PathBuf, source: io::Error },

    #[error("source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("cannot access source file {}: {source}", path.display())]
    SourceAccess { path: PathBuf, source: io::Error },

    #[error("{} is a directory, not a file", .0.display())]
    SourceIsDirectory(PathBuf),

    #[error("{} is not a regular file", .0.display())]
    SourceNotRegular(PathBuf),

    #[error("{} is already installed at that location", .0.display())]
    SameFile(PathBuf),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    CreateDir(FileOpsError),

    #[error("{error}")]
    RemoveExisting { error: FileOpsError, hint: String },

    #[error(transparent)]
    Copy(FileOpsError),

    #[error(transparent)]
    Permissions(FileOpsError),

    #[error("cancelled")]
    Cancelled,
}

impl InstallError {
    /// Returns a follow-up suggestion to show alongside the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            InstallError::RemoveExisting { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_is_transparent() {
        let err = InstallError::from(PlatformError::Unsupported("plan9".into()));
        assert_eq!(err.to_string(), "unsupported operating system: plan9");
        assert!(err.hint().is_none());
    }

    #[test]
    fn remove_existing_carries_hint() {
        let err = InstallError::RemoveExisting {
            error: FileOpsError::Remove {
                path: PathBuf::from("/usr/local/bin/hello"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
            hint: "try sudo".into(),
        };
        assert!(err.to_string().contains("/usr/local/bin/hello"));
        assert_eq!(err.hint(), Some("try sudo"));
    }

    #[test]
    fn directory_message_names_path() {
        let err = InstallError::SourceIsDirectory(PathBuf::from("/tmp/tools"));
        assert_eq!(err.to_string(), "/tmp/tools is a directory, not a file");
    }
}
