//! Hello endpoint — liveness probe.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HelloResponse;

/// `GET /api/hello` — reports the core version and whether a provider key is set.
///
/// Never calls the provider.
pub async fn hello_world(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: format!("Hello from veloria_core v{}", veloria_core::version()),
        provider: state.responder.provider_name().to_string(),
        provider_configured: state.config.completion.has_api_key(),
    })
}
