//! One tellm invocation, from availability check to response text.

use crate::chunk::Chunker;
use crate::compose::{final_prompt, Composition};
use crate::config::Config;
use crate::constants::PLAIN_OUTPUT_INSTRUCTIONS;
use crate::error::TellmError;
use crate::output::StatusSink;
use crate::provider::{Availability, LanguageModel};
use crate::summarize::{combine, summarize_chunks};
use crate::tokens;

/// Tunables for the piped-content path.
#[derive(Debug, Clone, Copy)]
pub struct PipelineSettings {
    pub chunker: Chunker,
    pub concurrency: usize,
    pub quiet: bool,
    pub verbose: bool,
}

impl PipelineSettings {
    pub fn from_config(config: &Config, quiet: bool, verbose: bool) -> Self {
        Self {
            chunker: Chunker::new(config.chunk_size(), config.long_lines()),
            concurrency: config.summary_concurrency(),
            quiet,
            verbose,
        }
    }
}

/// Runs a planned request against `model` and returns the text to print.
///
/// Nothing is returned unless every request succeeded.
pub async fn execute(
    model: &dyn LanguageModel,
    plan: Composition<'_>,
    settings: &PipelineSettings,
    status: &mut dyn StatusSink,
) -> Result<String, TellmError> {
    match model.availability().await {
        Availability::Available => {}
        Availability::Unavailable(reason) => {
            tracing::info!(%reason, "model unavailable");
            return Err(TellmError::ModelUnavailable(reason));
        }
        Availability::Unknown(detail) => return Err(TellmError::UnknownAvailability(detail)),
    }

    if !settings.quiet {
        status.thinking();
    }

    match plan {
        Composition::Direct { prompt } => model
            .respond(prompt, None)
            .await
            .map_err(TellmError::Generation),
        Composition::Piped { prompt, content } => {
            let chunks = settings.chunker.split(content);
            if settings.verbose {
                status.progress(chunks.len());
            }
            tracing::info!(
                parts = chunks.len(),
                max_chars = settings.chunker.max_chars(),
                "summarizing piped content"
            );

            let summaries = summarize_chunks(model, &chunks, settings.concurrency)
                .await
                .map_err(TellmError::Generation)?;
            let request = final_prompt(prompt, &combine(&summaries));

            if settings.verbose {
                let estimate = tokens::count_tokens(&request)
                    .map_err(|err| tracing::debug!(error = %err, "token estimate unavailable"))
                    .ok();
                status.prompt_size(request.chars().count(), estimate);
            }

            let response = model
                .respond(&request, Some(PLAIN_OUTPUT_INSTRUCTIONS))
                .await
                .map_err(TellmError::Generation)?;
            Ok(response.trim().to_string())
        }
    }
}
