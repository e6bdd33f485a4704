//! Console output for the CLI.
//!
//! Kept apart from the extraction and validation code so the library can be
//! used without printing side effects.

use std::fmt::Display;

use colored::Colorize;

use crate::{extract::ExtractWarning, keys::Validation};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Where progress and check results are printed.
///
/// When the JSON document goes to stdout, everything else moves to stderr so
/// the document can be piped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    channel: Channel,
    verbose: bool,
}

impl Reporter {
    pub fn new(channel: Channel, verbose: bool) -> Self {
        Self { channel, verbose }
    }

    /// Print a progress line, only in verbose mode.
    pub fn progress(&self, message: impl Display) {
        if self.verbose {
            self.line(message);
        }
    }

    pub fn line(&self, message: impl Display) {
        match self.channel {
            Channel::Stdout => println!("{}", message),
            Channel::Stderr => eprintln!("{}", message),
        }
    }

    /// Print the outcome of the key check: missing keys first, then extra keys.
    pub fn validation(&self, validation: &Validation, expected_count: usize) {
        for key in &validation.missing {
            self.line(format!("{} {}", "missing key:".bold().red(), key));
        }
        for key in &validation.extra {
            self.line(format!("{} {}", "extra key:".bold().yellow(), key));
        }

        if validation.passed() {
            self.line(format!(
                "{} All {} expected keys documented",
                SUCCESS_MARK.green(),
                expected_count
            ));
        } else {
            self.line(format!(
                "{} Key check failed: {} missing, {} extra",
                FAILURE_MARK.red(),
                validation.missing.len(),
                validation.extra.len()
            ));
        }
    }
}

pub fn print_warning(warning: &ExtractWarning) {
    eprintln!("{} {}", "warning:".bold().yellow(), warning);
}

pub fn print_error(message: impl Display) {
    eprintln!("{} {}", "error:".bold().red(), message);
}
