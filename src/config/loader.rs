//! File loading and environment overrides for tellm configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::chunk::LongLines;

impl Config {
    /// Loads the config file at `path`, or defaults if it does not exist.
    pub(super) fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Applies `TELLM_*` variables over file values.
    ///
    /// `lookup` abstracts the environment so tests do not touch process state.
    pub(super) fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(v) = var("TELLM_PROVIDER") {
            self.provider = Some(v);
        }
        if let Some(v) = var("TELLM_MODEL") {
            self.model = Some(v);
        }
        if let Some(v) = var("TELLM_BASE_URL") {
            self.base_url = Some(v);
        }
        if let Some(v) = var("TELLM_CHUNK_SIZE") {
            match v.parse() {
                Ok(n) => self.chunk_size = Some(n),
                Err(_) => tracing::warn!(value = %v, "ignoring non-numeric TELLM_CHUNK_SIZE"),
            }
        }
        if let Some(v) = var("TELLM_LONG_LINES") {
            match v.to_lowercase().as_str() {
                "cut" => self.long_lines = Some(LongLines::Cut),
                "keep" => self.long_lines = Some(LongLines::Keep),
                _ => tracing::warn!(value = %v, "ignoring unknown TELLM_LONG_LINES"),
            }
        }
    }
}
