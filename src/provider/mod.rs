//! Model gateway for tellm.
//!
//! The pipeline only ever talks to a [`LanguageModel`]: a probe that reports
//! whether the local service can answer, and a single `respond` call with
//! optional system instructions. [`Provider`] implements it on top of
//! rig-core clients pointed at a local Ollama or OpenAI-compatible server.

mod availability;
mod client;
mod gateway;
mod kind;
mod resolve;

pub use client::Provider;
pub use gateway::{Availability, LanguageModel, UnavailableReason};
pub use kind::ProviderKind;
pub use resolve::resolve_model;
