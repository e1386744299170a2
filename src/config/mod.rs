//! Configuration types and path resolution for tellm.
//!
//! tellm reads its settings as TOML from the platform's XDG config path
//! (e.g. `~/.config/tellm/config.toml` on Linux). The file is optional and
//! never written; `TELLM_*` environment variables override it.

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;

use anyhow::Result;

impl Config {
    /// Load config with precedence: environment > global file > defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.resolve_substitutions();
        config.validate()?;
        Ok(config)
    }
}
