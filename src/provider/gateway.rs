//! The capability the pipeline needs from a model service.

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

/// Whether the model service can take requests right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable(UnavailableReason),
    /// The service answered, but not in a way we understand.
    Unknown(String),
}

/// Why the model service cannot take requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Nothing is listening at the configured address.
    ServiceNotRunning { url: String },
    /// The server is up but does not have the requested model.
    ModelNotInstalled { model: String },
    /// The server is up but has no model loaded at all.
    NoModelsLoaded,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceNotRunning { url } => {
                write!(f, "no model server is answering at {url}")
            }
            Self::ModelNotInstalled { model } => {
                write!(f, "model '{model}' is not available on the server")
            }
            Self::NoModelsLoaded => write!(f, "the server has no models loaded"),
        }
    }
}

/// A language model reachable from tellm.
///
/// Implementations must be shareable across concurrent chunk requests.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Reports whether [`respond`](Self::respond) can be expected to work.
    async fn availability(&self) -> Availability;

    /// Sends one user message, optionally under system instructions, and
    /// returns the model's full reply.
    async fn respond(&self, message: &str, instructions: Option<&str>) -> Result<String>;
}
