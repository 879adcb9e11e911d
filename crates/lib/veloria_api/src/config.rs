//! API server configuration.

use veloria_core::CompletionConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Inference provider settings.
    pub completion: CompletionConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable     | Default          |
    /// |--------------|------------------|
    /// | `BIND_ADDR`  | `127.0.0.1:8000` |
    ///
    /// Provider variables are documented on [`CompletionConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".into()),
            completion: CompletionConfig::from_env(),
        }
    }
}
