//! Process environment captured once at startup.
//!
//! movebin reads no configuration files; everything it needs from the
//! outside world besides its arguments is collected here.

use std::io;
use std::path::PathBuf;

use movebin_platform::PROGRAM_FILES_VAR;

/// Read-only view of the process environment.
#[derive(Debug)]
pub struct Environment {
    /// OS identifier, as in `std::env::consts::OS`.
    pub os: String,
    /// Value of `%ProgramFiles%`, used on Windows only.
    pub program_files: Option<String>,
    /// Working directory relative source paths are resolved against.
    pub current_dir: io::Result<PathBuf>,
}

impl Environment {
    /// Captures the environment of the running process.
    pub fn from_process() -> Self {
        let env = Self {
            os: std::env::consts::OS.to_string(),
            program_files: std::env::var(PROGRAM_FILES_VAR).ok(),
            current_dir: std::env::current_dir(),
        };
        tracing::debug!(
            os = %env.os,
            program_files = ?env.program_files,
            cwd_available = env.current_dir.is_ok(),
            "environment captured"
        );
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_process_reports_host_os() {
        let env = Environment::from_process();
        assert_eq!(env.os, std::env::consts::OS);
        assert!(env.current_dir.is_ok());
    }
}
