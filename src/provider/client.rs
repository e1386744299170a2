//! LLM provider client for tellm.
//!
//! Contains the [`Provider`] struct which wraps a rig-core OpenAI-compatible
//! client pointed at the local server. Both Ollama and generic
//! OpenAI-compatible servers speak the same API under `<base>/v1`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

use super::availability;
use super::gateway::{Availability, LanguageModel};
use super::kind::ProviderKind;
use super::resolve::ModelSelection;
use crate::constants::{LOCAL_API_KEY, MAX_TOKENS};

/// A configured local LLM server ready to handle completion requests.
///
/// Agents are constructed on each call since they are cheap to create and
/// each request may carry different system instructions.
pub struct Provider {
    client: openai::Client,
    kind: ProviderKind,
    model: String,
    base_url: String,
    probe_timeout: Duration,
}

impl Provider {
    /// Creates a new [`Provider`] for the resolved selection.
    ///
    /// # Errors
    ///
    /// Returns an error if client construction fails.
    pub fn new(selection: &ModelSelection, probe_timeout: Duration) -> Result<Self> {
        let client = openai::Client::builder()
            .api_key(LOCAL_API_KEY)
            .base_url(format!("{}/v1", selection.base_url))
            .build()
            .with_context(|| format!("Failed to create client for {}", selection.base_url))?;
        Ok(Self {
            client,
            kind: selection.provider,
            model: selection.model.clone(),
            base_url: selection.base_url.clone(),
            probe_timeout,
        })
    }
}

#[async_trait]
impl LanguageModel for Provider {
    async fn availability(&self) -> Availability {
        availability::probe(self.kind, &self.base_url, &self.model, self.probe_timeout).await
    }

    async fn respond(&self, message: &str, instructions: Option<&str>) -> Result<String> {
        let agent = if let Some(sys) = instructions {
            self.client
                .agent(&self.model)
                .preamble(sys)
                .max_tokens(MAX_TOKENS)
                .build()
        } else {
            self.client
                .agent(&self.model)
                .max_tokens(MAX_TOKENS)
                .build()
        };

        tracing::debug!(
            model = %self.model,
            chars = message.chars().count(),
            "sending request"
        );
        let response = agent
            .prompt(message)
            .await
            .with_context(|| format!("request to model '{}' failed", self.model))?;
        Ok(response)
    }
}
