// @awa-component: CORE-HuggingFaceProvider
//
//! Hugging Face Inference API provider.
//!
//! One POST per prompt, bearer-token auth, explicit timeout. No retries: a
//! failed attempt is reported to the caller as-is.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::config::{CompletionConfig, GenerationParams};
use super::{Completion, CompletionError, CompletionProvider, interpret_response};

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Text generation over the Hugging Face Inference API.
#[derive(Clone, Debug)]
pub struct HuggingFaceProvider {
    client: Client,
    config: CompletionConfig,
}

impl HuggingFaceProvider {
    /// Build a provider with its own HTTP client using `config.timeout`.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Transport(format!("HTTP client setup failed: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    async fn complete(&self, prompt: &str) -> Result<Completion, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let started = Instant::now();
        let resp = self
            .client
            .post(&self.config.model_url)
            .bearer_auth(api_key)
            .json(&InferenceRequest {
                inputs: prompt,
                parameters: &self.config.parameters,
                options: InferenceOptions {
                    wait_for_model: self.config.wait_for_model,
                },
            })
            .send()
            .await
            .map_err(CompletionError::from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            warn!(status = status.as_u16(), "inference request rejected");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout(e.to_string())
            } else {
                CompletionError::Decode(e.to_string())
            }
        })?;

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference response received"
        );

        Ok(interpret_response(body))
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
