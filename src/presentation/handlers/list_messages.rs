use axum::Json;
use axum::extract::State;

use crate::presentation::state::AppState;

use super::{ApiError, MessageResponse};

#[tracing::instrument(skip(state))]
pub async fn list_messages_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.message_service.list().await?;
    tracing::debug!(count = messages.len(), "Listed messages");

    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}
