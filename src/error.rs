//! Error kinds that end a tellm invocation.
//!
//! Internal plumbing uses [`anyhow`]; the run pipeline converts failures into
//! a [`TellmError`] so `main` can report them uniformly and exit with `1`.

use thiserror::Error;

use crate::provider::UnavailableReason;

/// A fatal condition for one invocation. Every variant exits with code 1.
#[derive(Debug, Error)]
pub enum TellmError {
    /// Neither prompt text nor piped content was supplied.
    #[error("no prompt provided")]
    Usage,

    /// The model service reported that it cannot serve requests.
    #[error("Model Unavailable")]
    ModelUnavailable(UnavailableReason),

    /// The model service answered with a status we do not recognize.
    #[error("Unknown availability status.")]
    UnknownAvailability(String),

    /// A chunk summarization or the final request failed.
    #[error("Generation Error: {0:#}")]
    Generation(#[source] anyhow::Error),

    /// Piped standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Input(#[from] std::io::Error),

    /// The configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0:#}")]
    Config(#[source] anyhow::Error),
}

impl TellmError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
