//! Single-binary install pipeline.
//!
//! # Pipeline
//!
//! 1. **Resolve** the requested path against the working directory
//! 2. **Validate** that it names an existing non-directory file
//! 3. **Prepare** the platform's destination directory
//! 4. **Confirm** before replacing a file already installed there
//! 5. **Copy** the bytes and mark the result executable
//!
//! Steps 1–2 live in [`SourceFile`], steps 3–5 in [`Installer`]. The
//! platform lookup and raw filesystem work come from `movebin-platform`
//! and `movebin-file-ops`.

pub mod confirm;
pub mod error;
pub mod installer;
pub mod source;
pub mod types;

pub use confirm::{Confirm, PromptConfirm, is_affirmative};
pub use error::InstallError;
pub use installer::Installer;
pub use source::SourceFile;
pub use types::Installed;
