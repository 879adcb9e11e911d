//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /chat` request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /chat` response body.
///
/// `error` is only present when the provider could not be reached.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            error: None,
        }
    }
}

/// Body for plain errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/hello` response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloResponse {
    pub greeting: String,
    pub provider: String,
    pub provider_configured: bool,
}
