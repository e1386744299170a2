//! Centralized constants for tellm.
//!
//! All magic numbers, default strings, and model instructions live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "tellm";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Usage text printed when there is nothing to send.
pub const USAGE: &str = "Usage: tellm \"your prompt\"\n       echo \"content\" | tellm -i \"your instruction\"";

// --- Provider defaults ---

/// Default provider when none is configured.
pub const DEFAULT_PROVIDER: &str = "ollama";

/// Default base URL for local Ollama server.
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default LLM model identifier for Ollama.
pub const OLLAMA_DEFAULT_MODEL: &str = "llama3.2";

/// Default base URL for an OpenAI-compatible local server (llama.cpp, LM Studio).
pub const OPENAI_COMPAT_DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default model identifier for OpenAI-compatible servers.
pub const OPENAI_COMPAT_DEFAULT_MODEL: &str = "default";

/// Placeholder API key; local servers ignore it but the client requires one.
pub const LOCAL_API_KEY: &str = "tellm";

/// Maximum tokens for LLM completions.
pub const MAX_TOKENS: u64 = 2048;

/// Seconds to wait for the availability probe before giving up.
pub const PROBE_TIMEOUT_SECS: u64 = 3;

// --- Chunking ---

/// Maximum characters of piped content per summarization request.
pub const CHUNK_CONTENT_CHARS: usize = 8_000;

/// Default number of chunk summaries requested at once.
pub const SUMMARY_CONCURRENCY: usize = 1;

// --- Instructions ---

/// System instructions for each per-chunk summarization request.
pub const CHUNK_INSTRUCTIONS: &str = "Summarize in 1-2 sentences. Plain English only, no code.";

/// Prefix for the user message of each per-chunk request.
pub const CHUNK_PROMPT_PREFIX: &str = "Please summarize the following content in English:\n\n";

/// System instructions for the final request when piped content is involved.
pub const PLAIN_OUTPUT_INSTRUCTIONS: &str = "Respond with a SINGLE short plain-text result. \
No markdown, no code blocks, no explanations, no lists, no per-section breakdown. \
One unified answer only.";

/// Separator between the user's prompt and the combined summary.
pub const PROMPT_CONTENT_SEPARATOR: &str = "\n\n---\n";

// --- Logging ---

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "TELLM_LOG";
