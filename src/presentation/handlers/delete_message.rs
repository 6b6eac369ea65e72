use axum::Json;
use axum::extract::{Path, State};

use crate::presentation::state::AppState;

use super::{ApiError, DeleteMessageResponse, parse_message_id};

pub const DELETED_CONFIRMATION: &str = "Message deleted successfully.";

#[tracing::instrument(skip(state))]
pub async fn delete_message_handler(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<DeleteMessageResponse>, ApiError> {
    let id = parse_message_id(&message_id)?;
    state.message_service.delete(id).await?;

    Ok(Json(DeleteMessageResponse {
        message: DELETED_CONFIRMATION.to_string(),
    }))
}
