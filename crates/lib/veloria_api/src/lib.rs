//! # veloria_api
//!
//! HTTP API library for Veloria.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use veloria_core::completion::HuggingFaceProvider;
use veloria_core::{CompletionError, Responder};

use crate::config::ApiConfig;
use crate::handlers::{chat, hello};

/// Route paths.
pub mod routes {
    pub const POST_API_CHAT: &str = "/api/chat";
    pub const POST_API_CHAT_SLASH: &str = "/api/chat/";
    pub const POST_CHAT: &str = "/chat";
    pub const POST_CHAT_SLASH: &str = "/chat/";
    pub const GET_API_HELLO: &str = "/api/hello";
}

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Message pipeline.
    pub responder: Responder,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// State backed by the Hugging Face provider described in `config`.
    pub fn from_config(config: ApiConfig) -> Result<Self, CompletionError> {
        let provider = HuggingFaceProvider::new(config.completion.clone())?;
        Ok(Self {
            responder: Responder::new(Arc::new(provider)),
            config,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_API_HELLO, get(hello::hello_world))
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::POST_API_CHAT_SLASH, post(chat::chat_handler))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::POST_CHAT_SLASH, post(chat::chat_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
