//! Status output abstraction for tellm.
//!
//! Defines the [`StatusSink`] trait that carries every diagnostic message
//! (usage, progress, errors) away from the result stream. [`StderrStatus`]
//! prints them to standard error; tests substitute a recorder so nothing
//! global is written.

use colored::Colorize;
use std::io::{self, Write};

use crate::constants::USAGE;
use crate::error::TellmError;

/// Receiver for status and diagnostic messages.
///
/// Nothing written here ever reaches standard output.
pub trait StatusSink {
    /// The model is about to be asked.
    fn thinking(&mut self);

    /// Piped content was split into `parts` chunks.
    fn progress(&mut self, parts: usize);

    /// Size of the final prompt, in chars and approximate tokens.
    fn prompt_size(&mut self, chars: usize, tokens: Option<usize>);

    /// Reports a fatal error.
    fn error(&mut self, err: &TellmError);
}

/// Writes status messages to standard error.
pub struct StderrStatus {
    stderr: io::Stderr,
}

impl StderrStatus {
    pub fn new() -> Self {
        Self {
            stderr: io::stderr(),
        }
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        // Losing a status line is not worth failing the run over.
        writeln!(self.stderr.lock(), "{text}").ok();
    }
}

impl Default for StderrStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for StderrStatus {
    fn thinking(&mut self) {
        self.line("Thinking...".dimmed());
    }

    fn progress(&mut self, parts: usize) {
        self.line(format!("Processing {parts} parts...").dimmed());
    }

    fn prompt_size(&mut self, chars: usize, tokens: Option<usize>) {
        let text = match tokens {
            Some(tokens) => format!(
                "Final prompt: {} chars (~{} tokens)",
                crate::tokens::format_number(chars),
                crate::tokens::format_number(tokens)
            ),
            None => format!("Final prompt: {} chars", crate::tokens::format_number(chars)),
        };
        self.line(text.dimmed());
    }

    fn error(&mut self, err: &TellmError) {
        match err {
            TellmError::Usage => self.line(USAGE),
            TellmError::ModelUnavailable(reason) => {
                self.line(format!("{} {}", "error:".red().bold(), err));
                self.line(format!("Reason: {reason}"));
            }
            TellmError::UnknownAvailability(detail) => {
                self.line(format!("{} {}", "error:".red().bold(), err));
                tracing::debug!(%detail, "unrecognized availability answer");
            }
            _ => self.line(format!("{} {}", "error:".red().bold(), err)),
        }
    }
}
