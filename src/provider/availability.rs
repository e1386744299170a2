//! Availability probing for local model servers.
//!
//! Queries the server's model listing (Ollama's `/api/tags`, or `/v1/models`
//! for OpenAI-compatible servers) and classifies the answer into an
//! [`Availability`]. Classification is kept separate from the HTTP call so
//! it can be tested without a server.

use std::time::Duration;

use serde_json::Value;

use super::gateway::{Availability, UnavailableReason};
use super::kind::ProviderKind;

/// Asks the server at `base_url` whether `model` can be served.
pub async fn probe(
    kind: ProviderKind,
    base_url: &str,
    model: &str,
    timeout: Duration,
) -> Availability {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(err) => return Availability::Unknown(format!("could not build HTTP client: {err}")),
    };

    let url = listing_url(kind, base_url);
    tracing::debug!(%url, "probing model server");

    let resp = match client.get(&url).send().await {
        Ok(resp) => resp,
        Err(err) if err.is_connect() || err.is_timeout() => {
            tracing::debug!(error = %err, "model server unreachable");
            return Availability::Unavailable(UnavailableReason::ServiceNotRunning {
                url: base_url.to_string(),
            });
        }
        Err(err) => return Availability::Unknown(err.to_string()),
    };

    let status = resp.status();
    if !status.is_success() {
        return Availability::Unknown(format!("{url} answered with HTTP {status}"));
    }

    match resp.json::<Value>().await {
        Ok(body) => classify(kind, &body, model),
        Err(err) => Availability::Unknown(format!("unreadable model listing from {url}: {err}")),
    }
}

/// URL of the model listing endpoint for a server root.
fn listing_url(kind: ProviderKind, base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    match kind {
        ProviderKind::Ollama => format!("{base}/api/tags"),
        ProviderKind::OpenAiCompatible => format!("{base}/v1/models"),
    }
}

/// Classifies a model listing body.
pub(crate) fn classify(kind: ProviderKind, body: &Value, model: &str) -> Availability {
    match kind {
        ProviderKind::Ollama => classify_ollama(body, model),
        ProviderKind::OpenAiCompatible => classify_openai(body, model),
    }
}

/// `{"models": [{"name": "llama3.2:latest", ...}]}`
fn classify_ollama(body: &Value, model: &str) -> Availability {
    let Some(models) = body["models"].as_array() else {
        return Availability::Unknown("model listing has no `models` array".to_string());
    };
    let names: Vec<&str> = models.iter().filter_map(|m| m["name"].as_str()).collect();
    if names.is_empty() {
        return Availability::Unavailable(UnavailableReason::NoModelsLoaded);
    }

    // An untagged name refers to the `latest` tag.
    let tagged = format!("{model}:latest");
    if names.iter().any(|name| *name == model || *name == tagged) {
        Availability::Available
    } else {
        Availability::Unavailable(UnavailableReason::ModelNotInstalled {
            model: model.to_string(),
        })
    }
}

/// `{"data": [{"id": "..."}]}`
fn classify_openai(body: &Value, model: &str) -> Availability {
    let Some(data) = body["data"].as_array() else {
        return Availability::Unknown("model listing has no `data` array".to_string());
    };
    let ids: Vec<&str> = data.iter().filter_map(|m| m["id"].as_str()).collect();
    if ids.is_empty() {
        return Availability::Unavailable(UnavailableReason::NoModelsLoaded);
    }

    // Single-model servers (llama.cpp) answer any name; "default" means "whatever is loaded".
    if model == crate::constants::OPENAI_COMPAT_DEFAULT_MODEL || ids.contains(&model) {
        Availability::Available
    } else {
        Availability::Unavailable(UnavailableReason::ModelNotInstalled {
            model: model.to_string(),
        })
    }
}
