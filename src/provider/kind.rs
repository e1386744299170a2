//! Provider kind enumeration and per-kind defaults.
//!
//! Defines [`ProviderKind`] which identifies which local inference server
//! tellm talks to, along with the default model and base URL for each.

use anyhow::{anyhow, Result};

use crate::constants::{
    OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_MODEL, OPENAI_COMPAT_DEFAULT_BASE_URL,
    OPENAI_COMPAT_DEFAULT_MODEL,
};

/// Identifies which local LLM server to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Ollama (local models via its OpenAI-compatible API).
    Ollama,
    /// Any server exposing the OpenAI HTTP API (llama.cpp, LM Studio, vLLM).
    OpenAiCompatible,
}

impl ProviderKind {
    /// Parses a provider name string into a [`ProviderKind`].
    ///
    /// Matching is case-insensitive. Returns an error for unknown providers.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai-compatible" | "openai_compatible" | "openai" => Ok(Self::OpenAiCompatible),
            other => Err(anyhow!(
                "Unknown provider: {other}. Supported: ollama, openai-compatible"
            )),
        }
    }

    /// Returns the default model identifier for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Ollama => OLLAMA_DEFAULT_MODEL,
            Self::OpenAiCompatible => OPENAI_COMPAT_DEFAULT_MODEL,
        }
    }

    /// Returns the default server root for this provider (without `/v1`).
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Ollama => OLLAMA_DEFAULT_BASE_URL,
            Self::OpenAiCompatible => OPENAI_COMPAT_DEFAULT_BASE_URL,
        }
    }
}
