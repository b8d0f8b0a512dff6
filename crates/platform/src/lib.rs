//! Host platform identification and per-platform install policy.
//!
//! Everything OS-dependent in movebin goes through [`Platform`]: where
//! binaries are installed, whether executable bits are applied, and what
//! hint to show when the destination cannot be modified.

use std::fmt;
use std::path::PathBuf;

/// System-wide executable directory on Unix-like hosts.
pub const UNIX_BIN_DIR: &str = "/usr/local/bin";

/// Environment variable holding the Windows program files root.
pub const PROGRAM_FILES_VAR: &str = "ProgramFiles";

/// Errors for platform lookups.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("unsupported operating system: {0}")]
    Unsupported(String),

    #[error("ProgramFiles environment variable is not set")]
    MissingProgramFiles,
}

/// A host platform movebin knows how to install onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Darwin,
    Linux,
    Windows,
}

impl Platform {
    /// Maps an OS identifier to a platform.
    ///
    /// Accepts both `darwin` and Rust's `macos` spelling for Apple hosts.
    pub fn from_os_id(id: &str) -> Result<Self, PlatformError> {
        match id {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(PlatformError::Unsupported(other.to_string())),
        }
    }

    /// Returns true for platforms with Unix permission bits.
    pub fn is_unix_like(&self) -> bool {
        matches!(self, Platform::Darwin | Platform::Linux)
    }

    /// Returns true if installed files need their mode set to `0755`.
    pub fn sets_executable_mode(&self) -> bool {
        self.is_unix_like()
    }

    /// Resolves the system-wide directory binaries are installed into.
    ///
    /// `program_files` is the value of `%ProgramFiles%` and is only
    /// consulted on Windows, where an empty value counts as missing.
    pub fn destination_dir(&self, program_files: Option<&str>) -> Result<PathBuf, PlatformError> {
        match self {
            Platform::Darwin | Platform::Linux => Ok(PathBuf::from(UNIX_BIN_DIR)),
            Platform::Windows => {
                let base = program_files
                    .filter(|p| !p.is_empty())
                    .ok_or(PlatformError::MissingProgramFiles)?;
                let dir = PathBuf::from(base).join("bin");
                tracing::debug!(dir = %dir.display(), "resolved windows destination");
                Ok(dir)
            }
        }
    }

    /// Suggests how to re-run `program arg` with elevated privileges.
    pub fn elevation_hint(&self, program: &str, arg: &str) -> String {
        match self {
            Platform::Darwin | Platform::Linux => format!(
                "If you're getting a permission denied error, try running with sudo: sudo {program} {arg}"
            ),
            Platform::Windows => format!(
                "If you're getting an access denied error, run {program} {arg} from an Administrator prompt"
            ),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Darwin => write!(f, "darwin"),
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
