//! Data types for the install flow.

use std::path::PathBuf;

/// Outcome of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    /// Absolute path of the file that was copied.
    pub source: PathBuf,
    /// Absolute path the file was installed to.
    pub destination: PathBuf,
    /// Number of bytes written to the destination.
    pub bytes: u64,
    /// Whether a previously installed file was replaced.
    pub replaced: bool,
}
