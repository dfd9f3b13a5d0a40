use crate::dtos::{ChatRequest, ChatResponse};
use crate::services::ConversationTurn;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(
    skip(state, request),
    fields(message_len = request.message.len(), history_len = request.history.len())
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    request.validate()?;

    let location_name = request.location.as_ref().and_then(|l| l.name.clone());
    let history: Vec<ConversationTurn> = request.history.into_iter().map(Into::into).collect();

    let reply = state
        .assistant
        .chat(&request.message, &history, location_name.as_deref())
        .await;

    Ok(Json(reply.into()))
}
