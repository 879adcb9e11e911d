// @awa-component: CORE-CompletionProvider
//
//! Remote completion fallback.
//!
//! Messages that pass the topic gate but match no canned answer are sent to a
//! text-generation provider. The outbound call and the parsing of its response
//! shapes live behind [`CompletionProvider`] so the pipeline can run against a
//! test double.
//!
//! # Response shapes
//!
//! - `[{"generated_text": "..."}]` → [`Completion::Generated`]
//! - `{"error": "..."}` → [`Completion::ProviderError`]
//! - anything else → [`Completion::Unrecognized`]

pub mod config;
pub mod huggingface;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::prompt::{ASSISTANT_MARKER, USER_MARKER};

pub use config::{CompletionConfig, GenerationParams};
pub use huggingface::HuggingFaceProvider;

/// Reply prefix for provider-reported errors.
pub const MODEL_ERROR_PREFIX: &str = "⚠️ Model error: ";
/// Reply when the provider answered with an unexpected shape.
pub const NO_VALID_REPLY: &str = "⚠️ No valid AI reply.";
/// Reply when the provider could not be reached at all.
pub const APOLOGY: &str = "⚠️ Sorry, the AI is not responding right now.";

/// Failures that prevent any reply from being produced.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HF_API_KEY is not configured")]
    MissingApiKey,

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Decode(String),
}

impl CompletionError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CompletionError::Timeout(e.to_string())
        } else if e.is_decode() {
            CompletionError::Decode(e.to_string())
        } else {
            CompletionError::Transport(e.to_string())
        }
    }
}

/// A successfully received provider response, already sorted by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Raw generated continuation, before turn-marker truncation.
    Generated(String),
    /// The provider answered 2xx but reported an error in the payload.
    ProviderError(String),
    Unrecognized,
}

impl Completion {
    /// Final user-facing reply text for this completion.
    pub fn into_reply(self) -> String {
        match self {
            Completion::Generated(text) => clean_generated(&text),
            Completion::ProviderError(message) => format!("{MODEL_ERROR_PREFIX}{message}"),
            Completion::Unrecognized => NO_VALID_REPLY.to_string(),
        }
    }
}

/// Text generation backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt and return the interpreted response.
    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError>;

    /// Provider identifier for logging.
    fn name(&self) -> &str;
}

/// Sort a decoded 2xx response body into one of the known shapes.
pub fn interpret_response(body: Value) -> Completion {
    match body {
        Value::Array(items) => match items.into_iter().next() {
            Some(Value::Object(mut first)) => match first.remove("generated_text") {
                Some(Value::String(text)) => Completion::Generated(text),
                _ => Completion::Unrecognized,
            },
            _ => Completion::Unrecognized,
        },
        Value::Object(mut object) => match object.remove("error") {
            Some(Value::String(message)) => Completion::ProviderError(message),
            Some(other) => Completion::ProviderError(other.to_string()),
            None => Completion::Unrecognized,
        },
        _ => Completion::Unrecognized,
    }
}

/// Cut a generated continuation at the first turn marker and trim it.
///
/// Models sometimes keep writing the conversation on their own; anything from
/// the first `User:` or `Veloria AI:` on is dropped.
pub fn clean_generated(text: &str) -> String {
    let text = text.trim();
    let cut = [USER_MARKER, ASSISTANT_MARKER]
        .iter()
        .filter_map(|marker| text.find(marker))
        .min()
        .unwrap_or(text.len());
    text[..cut].trim().to_string()
}
