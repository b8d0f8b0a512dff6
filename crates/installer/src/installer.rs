//! The install pipeline from a validated source to an executable on the path.

use std::io::Write;
use std::path::Path;

use movebin_file_ops as file_ops;
use movebin_platform::Platform;
use tracing::{debug, info, warn};

use crate::confirm::Confirm;
use crate::error::InstallError;
use crate::source::SourceFile;
use crate::types::Installed;

/// Question asked before an existing destination file is replaced.
pub const OVERWRITE_PROMPT: &str = "Do you want to overwrite it?";

/// Copies a source file into a destination directory for one platform.
///
/// Progress and the final report go to `stdout`; the collision notice
/// goes to `stderr`. Errors are returned, not printed.
pub struct Installer<'a> {
    platform: Platform,
    invocation: (String, String),
    confirm: &'a mut dyn Confirm,
    stdout: &'a mut dyn Write,
    stderr: &'a mut dyn Write,
}

impl<'a> Installer<'a> {
    pub fn new(
        platform: Platform,
        confirm: &'a mut dyn Confirm,
        stdout: &'a mut dyn Write,
        stderr: &'a mut dyn Write,
    ) -> Self {
        Self {
            platform,
            invocation: ("movebin".into(), String::new()),
            confirm,
            stdout,
            stderr,
        }
    }

    /// Sets the command line quoted back in the elevation hint.
    pub fn with_invocation(mut self, program: impl Into<String>, arg: impl Into<String>) -> Self {
        self.invocation = (program.into(), arg.into());
        self
    }

    /// Installs `source` into `dest_dir`.
    ///
    /// Steps:
    /// 1. Create `dest_dir` (and parents) if missing
    /// 2. If `dest_dir/<name>` exists, ask before removing it
    /// 3. Copy the bytes
    /// 4. Set mode `0755` on Unix-like platforms
    pub fn install(&mut self, source: &SourceFile, dest_dir: &Path) -> Result<Installed, InstallError> {
        file_ops::ensure_dir(dest_dir).map_err(InstallError::CreateDir)?;

        let destination = dest_dir.join(source.file_name());
        debug!(
            platform = %self.platform,
            source = %source.path().display(),
            destination = %destination.display(),
            "installing"
        );

        let replaced = destination.exists();
        if replaced {
            self.replace_existing(source, &destination)?;
        }

        let bytes = file_ops::copy_file(source.path(), &destination).map_err(InstallError::Copy)?;

        if self.platform.sets_executable_mode() {
            file_ops::set_executable(&destination).map_err(InstallError::Permissions)?;
        }

        info!(
            source = %source.path().display(),
            destination = %destination.display(),
            bytes,
            replaced,
            "installed"
        );
        self.say(format_args!(
            "Successfully moved {} to {}",
            source.path().display(),
            destination.display()
        ));

        Ok(Installed {
            source: source.path().to_path_buf(),
            destination,
            bytes,
            replaced,
        })
    }

    /// Asks for consent and removes an already installed file.
    fn replace_existing(&mut self, source: &SourceFile, destination: &Path) -> Result<(), InstallError> {
        if is_same_file(source.path(), destination) {
            return Err(InstallError::SameFile(source.path().to_path_buf()));
        }

        self.complain(format_args!(
            "Error: file already exists at {}",
            destination.display()
        ));

        if !self.confirm.confirm(OVERWRITE_PROMPT) {
            info!(destination = %destination.display(), "overwrite declined");
            return Err(InstallError::Cancelled);
        }

        file_ops::remove_existing(destination).map_err(|error| {
            debug!(
                destination = %destination.display(),
                permission_denied = error.is_permission_denied(),
                "cannot remove existing file"
            );
            let (program, arg) = &self.invocation;
            InstallError::RemoveExisting {
                error,
                hint: self.platform.elevation_hint(program, arg),
            }
        })?;

        self.say(format_args!("Overwriting existing file..."));
        Ok(())
    }

    fn say(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.stdout, "{line}") {
            warn!(error = %e, "failed to write to stdout");
        }
    }

    fn complain(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.stderr, "{line}") {
            warn!(error = %e, "failed to write to stderr");
        }
    }
}

/// Returns true if replacing `destination` would delete `source` itself.
///
/// A symlink at the destination is never the same file: removing it
/// leaves its target alone.
fn is_same_file(source: &Path, destination: &Path) -> bool {
    match std::fs::symlink_metadata(destination) {
        Ok(meta) if meta.file_type().is_symlink() => return false,
        Ok(_) => {}
        Err(_) => return false,
    }

    match (std::fs::canonicalize(source), std::fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
