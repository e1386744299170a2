//! Final prompt composition.
//!
//! Decides whether a run is a plain prompt or a piped one, and folds the
//! combined summary of piped content into the single final request.

use crate::constants::PROMPT_CONTENT_SEPARATOR;
use crate::error::TellmError;

/// What the final request is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition<'a> {
    /// No usable piped content: the prompt goes out as-is, without
    /// system instructions, and the reply is printed untrimmed.
    Direct { prompt: &'a str },
    /// Piped content is summarized first; the final request carries the
    /// plain-output instructions and the reply is trimmed.
    Piped { prompt: &'a str, content: &'a str },
}

impl<'a> Composition<'a> {
    /// Chooses the mode for a prompt and an optional stdin payload.
    ///
    /// A payload that is empty or holds nothing but line breaks counts as no
    /// payload. Every other payload goes through summarization, however small.
    ///
    /// # Errors
    ///
    /// [`TellmError::Usage`] when there is neither prompt text nor content.
    pub fn plan(prompt: &'a str, payload: Option<&'a str>) -> Result<Self, TellmError> {
        match payload.filter(|content| !content.trim_matches('\n').is_empty()) {
            Some(content) => Ok(Self::Piped { prompt, content }),
            None if prompt.is_empty() => Err(TellmError::Usage),
            None => Ok(Self::Direct { prompt }),
        }
    }
}

/// Builds the final request text from the prompt and the combined summary.
pub fn final_prompt(prompt: &str, combined: &str) -> String {
    if prompt.is_empty() {
        combined.to_string()
    } else {
        format!("{prompt}{PROMPT_CONTENT_SEPARATOR}{combined}")
    }
}
