//! Ties argument parsing, environment and the install pipeline together.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use movebin_installer::{Confirm, InstallError, Installed, Installer, SourceFile};
use movebin_platform::Platform;

use crate::cli::Cli;
use crate::config::Environment;

/// Everything a run reads from or writes to the outside world.
pub struct Context<'a> {
    pub args: Vec<OsString>,
    pub env: Environment,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub confirm: &'a mut dyn Confirm,
}

/// Process outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Runs one invocation and reports the outcome on the context's streams.
pub fn run(ctx: &mut Context<'_>) -> Status {
    let cli = match Cli::try_parse_from(ctx.args.iter()) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(ctx.stdout, "{}", e.render());
            return Status::Success;
        }
        Err(e) => {
            let err = InstallError::Usage(e.render().to_string());
            tracing::debug!(error = %err, "usage error");
            let _ = write!(ctx.stderr, "{err}");
            return Status::Failure;
        }
    };

    match install(ctx, &cli) {
        Ok(installed) => {
            tracing::debug!(bytes = installed.bytes, "done");
            Status::Success
        }
        Err(InstallError::Cancelled) => {
            let _ = writeln!(ctx.stdout, "Cancelled");
            Status::Failure
        }
        Err(e) => {
            // Already reported to the user below.
            tracing::debug!(error = %e, "install failed");
            let _ = writeln!(ctx.stderr, "Error: {e}");
            if let Some(hint) = e.hint() {
                let _ = writeln!(ctx.stderr, "Hint: {hint}");
            }
            Status::Failure
        }
    }
}

fn install(ctx: &mut Context<'_>, cli: &Cli) -> Result<Installed, InstallError> {
    let source = SourceFile::resolve(&cli.binary, ctx.env.current_dir.as_deref())?;
    let platform = Platform::from_os_id(&ctx.env.os)?;
    let dest_dir = platform.destination_dir(ctx.env.program_files.as_deref())?;

    let program = ctx
        .args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "movebin".into());

    Installer::new(platform, &mut *ctx.confirm, &mut *ctx.stdout, &mut *ctx.stderr)
        .with_invocation(program, cli.binary.display().to_string())
        .install(&source, &dest_dir)
}
