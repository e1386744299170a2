//! Model resolution logic for tellm.
//!
//! Resolves which server kind, model and base URL to use based on CLI flags,
//! the loaded config (which already carries environment overrides), and
//! hardcoded defaults. Supports `provider/model` shorthand syntax.

use anyhow::Result;

use super::kind::ProviderKind;
use crate::config::Config;
use crate::constants::DEFAULT_PROVIDER;

/// Resolved provider, model and server address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub provider: ProviderKind,
    pub model: String,
    pub base_url: String,
}

/// Resolve which provider and model to use.
/// Priority: CLI flags > environment / config.toml > defaults.
///
/// Accepts these formats:
///   --model ollama/qwen2.5:7b  (provider/model shorthand, only when --provider is omitted
///                               and the prefix names a known provider)
///   --model hf.co/org/model    (slash preserved as model name)
///   --provider openai-compatible --model phi-3
///   --provider ollama          (uses provider's default model)
///   (nothing)                  (uses config, then hardcoded default)
pub fn resolve_model(
    cli_provider: Option<&str>,
    cli_model: Option<&str>,
    config: &Config,
) -> Result<ModelSelection> {
    let configured = ProviderKind::from_str(config.provider.as_deref().unwrap_or(DEFAULT_PROVIDER))?;

    // If --model has a known provider prefix AND no explicit --provider, parse as shorthand
    let mut shorthand = None;
    if cli_provider.is_none() {
        if let Some((prov, model)) = cli_model.and_then(|m| m.split_once('/')) {
            if let Ok(kind) = ProviderKind::from_str(prov) {
                shorthand = Some((kind, Some(model.to_string())));
            }
        }
    }

    let (provider, cli_model) = match shorthand {
        Some(pair) => pair,
        None => {
            let provider = match cli_provider {
                Some(name) => ProviderKind::from_str(name)?,
                None => configured,
            };
            (provider, cli_model.map(String::from))
        }
    };

    // Configured model and URL only apply to the configured provider.
    let same_provider = provider == configured;
    let model = cli_model
        .or_else(|| config.model.clone().filter(|_| same_provider))
        .unwrap_or_else(|| provider.default_model().to_string());
    let base_url = config
        .base_url
        .clone()
        .filter(|_| same_provider)
        .unwrap_or_else(|| provider.default_base_url().to_string());

    Ok(ModelSelection {
        provider,
        model,
        base_url: base_url.trim_end_matches('/').to_string(),
    })
}
