//! Environment variable substitution, defaults and validation.

use anyhow::{bail, Result};
use std::time::Duration;

use super::types::Config;
use crate::chunk::LongLines;
use crate::constants::{CHUNK_CONTENT_CHARS, PROBE_TIMEOUT_SECS, SUMMARY_CONCURRENCY};
use crate::provider::ProviderKind;

impl Config {
    /// Resolve {env:VAR_NAME} patterns in string fields.
    pub(super) fn resolve_substitutions(&mut self) {
        for field in [&mut self.provider, &mut self.model, &mut self.base_url] {
            if let Some(value) = field {
                *value = Self::resolve_str(value);
            }
        }
    }

    /// Replace {env:VAR} with the environment variable value.
    fn resolve_str(s: &str) -> String {
        Self::resolve_str_with(s, |name| std::env::var(name).ok())
    }

    /// Substitutes each {env:VAR} once; inserted values are not scanned again.
    fn resolve_str_with(s: &str, var: impl Fn(&str) -> Option<String>) -> String {
        let mut result = String::with_capacity(s.len());
        let mut rest = s;
        while let Some(start) = rest.find("{env:") {
            let Some(end) = rest[start..].find('}') else {
                break;
            };
            result.push_str(&rest[..start]);
            result.push_str(&var(&rest[start + 5..start + end]).unwrap_or_default());
            rest = &rest[start + end + 1..];
        }
        result.push_str(rest);
        result
    }

    /// Rejects values that would make the pipeline misbehave.
    pub(super) fn validate(&self) -> Result<()> {
        if let Some(provider) = self.provider.as_deref() {
            ProviderKind::from_str(provider)?;
        }
        if self.chunk_size == Some(0) {
            bail!("chunk_size must be at least 1");
        }
        if self.summary_concurrency == Some(0) {
            bail!("summary_concurrency must be at least 1");
        }
        Ok(())
    }

    /// Maximum characters of piped content per summarization request.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(CHUNK_CONTENT_CHARS)
    }

    /// Policy for lines longer than [`chunk_size`](Self::chunk_size).
    pub fn long_lines(&self) -> LongLines {
        self.long_lines.unwrap_or_default()
    }

    /// Number of chunk summaries requested at once.
    pub fn summary_concurrency(&self) -> usize {
        self.summary_concurrency.unwrap_or(SUMMARY_CONCURRENCY)
    }

    /// How long the availability probe may take.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.unwrap_or(PROBE_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.chunk_size(), 8_000);
        assert_eq!(config.long_lines(), LongLines::Cut);
        assert_eq!(config.summary_concurrency(), 1);
        assert_eq!(config.probe_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn substitutes_env_placeholders() {
        // PATH is set in every test environment.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(Config::resolve_str("x{env:PATH}y"), format!("x{path}y"));
        assert_eq!(Config::resolve_str("{env:unterminated"), "{env:unterminated");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let lookup = |name: &str| match name {
            "SELF" => Some("{env:SELF}".to_string()),
            "HOST" => Some("localhost".to_string()),
            _ => None,
        };
        assert_eq!(Config::resolve_str_with("{env:SELF}", lookup), "{env:SELF}");
        assert_eq!(
            Config::resolve_str_with("http://{env:HOST}:{env:PORT}/{env:SELF}", lookup),
            "http://localhost:/{env:SELF}"
        );
    }

    #[test]
    fn rejects_zero_sizes_and_unknown_provider() {
        let zero_chunk = Config {
            chunk_size: Some(0),
            ..Config::default()
        };
        assert!(zero_chunk.validate().is_err());

        let zero_workers = Config {
            summary_concurrency: Some(0),
            ..Config::default()
        };
        assert!(zero_workers.validate().is_err());

        let bad_provider = Config {
            provider: Some("anthropic".to_string()),
            ..Config::default()
        };
        assert!(bad_provider.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }
}
