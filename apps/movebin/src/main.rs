//! movebin entry point.

mod app;
mod cli;
mod config;

use std::io;
use std::process::ExitCode;

use movebin_installer::PromptConfirm;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "MOVEBIN_LOG";

/// Filter used when `MOVEBIN_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<ExitCode> {
    // Logs share stderr with errors, so stay quiet unless asked.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting movebin");

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let mut confirm = PromptConfirm::new(io::stdin().lock(), io::stderr());

    let mut ctx = app::Context {
        args: std::env::args_os().collect(),
        env: config::Environment::from_process(),
        stdout: &mut stdout,
        stderr: &mut stderr,
        confirm: &mut confirm,
    };

    Ok(app::run(&mut ctx).into())
}
