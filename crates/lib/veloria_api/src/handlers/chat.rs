// @awa-component: API-ChatHandler
//
//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{debug, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};

/// Error text for a missing, empty or unreadable message.
pub const NO_MESSAGE: &str = "No message provided.";

/// `POST /api/chat/` (also `/chat`) — classify a message and reply to it.
///
/// Greetings, off-topic messages and common medication questions are answered
/// locally. Everything else goes to the completion provider; if that call
/// fails the response is 503 with a fixed apology and the failure detail.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let message = match payload {
        Ok(Json(body)) => body.message,
        Err(rejection) => {
            debug!(%rejection, "unreadable chat body");
            None
        }
    };

    let message = message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation(NO_MESSAGE.into()))?;

    let reply = state.responder.respond(message).await.map_err(|e| {
        warn!(error = %e, "completion failed");
        AppError::from(e)
    })?;

    Ok(Json(ChatResponse::reply(reply.text)))
}
