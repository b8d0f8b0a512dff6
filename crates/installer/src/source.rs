//! Resolution and validation of the file being installed.

use std::ffi::OsStr;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::InstallError;

/// An absolute path known to name an existing regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    /// Resolves `requested` against `cwd` and checks that it is a file.
    ///
    /// `cwd` is only consulted for relative paths, so an unavailable
    /// working directory is not an error for absolute ones. Symlinks are
    /// followed when checking the file type.
    pub fn resolve(requested: &Path, cwd: Result<&Path, &io::Error>) -> Result<Self, InstallError> {
        let path = absolute(requested, cwd)?;

        let metadata = std::fs::metadata(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                InstallError::SourceMissing(path.clone())
            } else {
                InstallError::SourceAccess {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        if metadata.is_dir() {
            return Err(InstallError::SourceIsDirectory(path));
        }
        if !metadata.is_file() {
            return Err(InstallError::SourceNotRegular(path));
        }

        tracing::debug!(path = %path.display(), size = metadata.len(), "source validated");
        Ok(Self { path })
    }

    /// Returns the absolute path of the source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the base name the file is installed under.
    pub fn file_name(&self) -> &OsStr {
        // A validated file path always ends in a normal component.
        self.path.file_name().unwrap_or(self.path.as_os_str())
    }
}

/// Makes `path` absolute and removes `.` and `..` lexically.
fn absolute(path: &Path, cwd: Result<&Path, &io::Error>) -> Result<PathBuf, InstallError> {
    if path.as_os_str().is_empty() {
        return Err(InstallError::ResolvePath {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
        });
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = cwd.map_err(|e| InstallError::ResolvePath {
            path: path.to_path_buf(),
            source: io::Error::new(e.kind(), e.to_string()),
        })?;
        cwd.join(path)
    };

    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
