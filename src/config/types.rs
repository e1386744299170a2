//! Struct definitions for tellm configuration.

use serde::{Deserialize, Serialize};

use crate::chunk::LongLines;

/// Root configuration for tellm, deserialized from `config.toml`.
///
/// All fields are optional so tellm runs with sensible defaults when no
/// config file exists. Accessors in `resolve.rs` apply the defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server kind (`"ollama"` or `"openai-compatible"`).
    pub provider: Option<String>,
    /// Model identifier on that server (e.g. `"llama3.2"`).
    pub model: Option<String>,
    /// Server root URL, without the `/v1` suffix.
    pub base_url: Option<String>,
    /// Maximum characters of piped content per summarization request.
    pub chunk_size: Option<usize>,
    /// How to treat a line longer than `chunk_size`.
    pub long_lines: Option<LongLines>,
    /// Number of chunk summaries requested at once.
    pub summary_concurrency: Option<usize>,
    /// Seconds to wait for the availability probe.
    pub probe_timeout_secs: Option<u64>,
}
