//! Yes/no confirmation before destructive steps.

use std::io::{BufRead, Write};

/// Asks the user a yes/no question.
///
/// The CLI answers from stdin via [`PromptConfirm`]; tests substitute
/// fixed answers.
pub trait Confirm {
    /// Returns true only on an explicit affirmative answer.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Prompts on `output` and reads a single line answer from `input`.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = write!(self.output, "{prompt} [y/N]: ").and_then(|()| self.output.flush()) {
            tracing::warn!(error = %e, "failed to write prompt");
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) => {
                tracing::debug!("no answer on input, assuming no");
                false
            }
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read answer, assuming no");
                false
            }
        }
    }
}

/// Returns true for `y` or `yes`, ignoring surrounding whitespace and case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::<u8>::new();
        let answer = PromptConfirm::new(Cursor::new(input.as_bytes()), &mut out)
            .confirm("Do you want to overwrite it?");
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn affirmative_tokens() {
        for token in ["y", "Y", "yes", "YES", "Yes", "  y  ", "yes\r\n"] {
            assert!(is_affirmative(token), "{token:?} should be yes");
        }
    }

    #[test]
    fn everything_else_is_no() {
        for token in ["", "\n", "n", "no", "yep", "sure", "1", "y e s"] {
            assert!(!is_affirmative(token), "{token:?} should be no");
        }
    }

    #[test]
    fn prompt_is_written() {
        let (_, prompt) = ask("n\n");
        assert_eq!(prompt, "Do you want to overwrite it? [y/N]: ");
    }

    #[test]
    fn reads_yes() {
        assert!(ask("y\n").0);
        assert!(ask("yes\n").0);
    }

    #[test]
    fn empty_line_defaults_to_no() {
        assert!(!ask("\n").0);
    }

    #[test]
    fn eof_defaults_to_no() {
        assert!(!ask("").0);
    }

    #[test]
    fn only_first_line_counts() {
        assert!(!ask("no\nyes\n").0);
    }

    #[test]
    fn read_error_defaults_to_no() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }
        }

        let mut out = Vec::<u8>::new();
        let mut confirm = PromptConfirm::new(io::BufReader::new(Broken), &mut out);
        assert!(!confirm.confirm("Overwrite?"));
    }
}
