//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Copy a binary into the system-wide bin directory and make it executable.
#[derive(Parser, Debug)]
#[command(name = "movebin", version)]
pub struct Cli {
    /// Path to the binary to install.
    pub binary: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_positional() {
        let cli = Cli::try_parse_from(["movebin", "./tools/hello"]).unwrap();
        assert_eq!(cli.binary, PathBuf::from("./tools/hello"));
    }

    #[test]
    fn missing_binary_is_an_error() {
        let err = Cli::try_parse_from(["movebin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extra_argument_is_an_error() {
        let err = Cli::try_parse_from(["movebin", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
