use axum::Json;
use axum::extract::{Path, State};

use crate::presentation::state::AppState;

use super::{ApiError, MessageResponse, parse_message_id};

#[tracing::instrument(skip(state))]
pub async fn get_message_handler(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_message_id(&message_id)?;
    let message = state.message_service.get(id).await?;

    Ok(Json(MessageResponse::from(message)))
}
