//! Filesystem primitives for installing a single binary.
//!
//! Provides destination directory creation, streamed file copy with
//! partial-file cleanup, removal of a file being replaced, and Unix
//! permission handling. Every error carries the path it concerns.

mod copy;
mod delete;
mod error;
mod install;

pub use copy::{copy_file, copy_stream};
pub use delete::remove_existing;
pub use error::FileOpsError;
pub use install::{ensure_dir, set_executable};

/// Mode applied to created directories and installed binaries on Unix.
pub const EXECUTABLE_MODE: u32 = 0o755;
