//! In-memory doubles for the model gateway and the status sink.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::constants::{CHUNK_INSTRUCTIONS, CHUNK_PROMPT_PREFIX, USAGE};
use crate::error::TellmError;
use crate::output::StatusSink;
use crate::provider::{Availability, LanguageModel};

/// One recorded `respond` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub message: String,
    pub instructions: Option<String>,
}

/// A [`LanguageModel`] that answers with canned, recognizable text.
///
/// Chunk requests answer `"  summary(<chunk>)\n"`, instructed final requests
/// `"  answer(<message>)\n"`, bare requests `"  direct(<message>)\n"`. The
/// padding lets tests see where trimming happens.
pub struct ScriptedModel {
    availability: Availability,
    fail_when: Option<String>,
    delay: fn(&str) -> Duration,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            availability: Availability::Available,
            fail_when: None,
            delay: |_| Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Fails any request whose message contains `needle`.
    pub fn failing_when(mut self, needle: &str) -> Self {
        self.fail_when = Some(needle.to_string());
        self
    }

    /// Sleeps for `delay(message)` before answering.
    pub fn with_delay(mut self, delay: fn(&str) -> Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn availability(&self) -> Availability {
        self.availability.clone()
    }

    async fn respond(&self, message: &str, instructions: Option<&str>) -> Result<String> {
        self.calls.lock().unwrap().push(Call {
            message: message.to_string(),
            instructions: instructions.map(String::from),
        });

        let delay = (self.delay)(message);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(needle) = &self.fail_when {
            if message.contains(needle.as_str()) {
                bail!("simulated failure on {needle:?}");
            }
        }

        Ok(match instructions {
            Some(CHUNK_INSTRUCTIONS) => {
                let chunk = message.strip_prefix(CHUNK_PROMPT_PREFIX).unwrap_or(message);
                format!("  summary({chunk})\n")
            }
            Some(_) => format!("  answer({message})\n"),
            None => format!("  direct({message})\n"),
        })
    }
}

/// Collects status messages in memory.
#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub lines: Vec<String>,
}

impl StatusSink for RecordingStatus {
    fn thinking(&mut self) {
        self.lines.push("Thinking...".to_string());
    }

    fn progress(&mut self, parts: usize) {
        self.lines.push(format!("Processing {parts} parts..."));
    }

    fn prompt_size(&mut self, chars: usize, _tokens: Option<usize>) {
        self.lines.push(format!("Final prompt: {chars} chars"));
    }

    fn error(&mut self, err: &TellmError) {
        match err {
            TellmError::Usage => self.lines.push(USAGE.to_string()),
            _ => self.lines.push(format!("error: {err}")),
        }
    }
}
