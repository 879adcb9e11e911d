// @awa-component: CORE-CompletionConfig
//
//! Completion provider configuration.
//!
//! Everything has a default except the API key. Values come from environment
//! variables; unparseable numbers and a zero timeout fall back to the default.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/HuggingFaceH4/zephyr-7b-beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Sampling parameters sent with every request.
///
/// Serialized as-is into the request's `parameters` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    /// Return only the continuation, not the prompt.
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 300,
            temperature: 0.4,
            top_p: 0.8,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// Resolved configuration for the inference endpoint.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Model inference URL.
    pub model_url: String,
    /// Bearer token. `None` makes every completion fail with `MissingApiKey`.
    pub api_key: Option<String>,
    /// Whole-request timeout for the outbound call.
    pub timeout: Duration,
    pub parameters: GenerationParams,
    /// Ask the provider to wait for a cold model instead of failing fast.
    pub wait_for_model: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            parameters: GenerationParams::default(),
            wait_for_model: true,
        }
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("model_url", &self.model_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("parameters", &self.parameters)
            .field("wait_for_model", &self.wait_for_model)
            .finish()
    }
}

impl CompletionConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable                 | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `HF_API_KEY`             | none                             |
    /// | `VELORIA_MODEL_URL`      | zephyr-7b-beta inference URL     |
    /// | `VELORIA_TIMEOUT_SECS`   | `60`                             |
    /// | `VELORIA_MAX_NEW_TOKENS` | `300`                            |
    /// | `VELORIA_TEMPERATURE`    | `0.4`                            |
    /// | `VELORIA_TOP_P`          | `0.8`                            |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            model_url: lookup("VELORIA_MODEL_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.model_url),
            api_key: lookup("HF_API_KEY").filter(|v| !v.trim().is_empty()),
            timeout: parse_var(&lookup, "VELORIA_TIMEOUT_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            parameters: GenerationParams {
                max_new_tokens: parse_var(&lookup, "VELORIA_MAX_NEW_TOKENS")
                    .unwrap_or(defaults.parameters.max_new_tokens),
                temperature: parse_var(&lookup, "VELORIA_TEMPERATURE")
                    .unwrap_or(defaults.parameters.temperature),
                top_p: parse_var(&lookup, "VELORIA_TOP_P").unwrap_or(defaults.parameters.top_p),
                ..defaults.parameters
            },
            wait_for_model: defaults.wait_for_model,
        }
    }

    /// Whether an API key is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
