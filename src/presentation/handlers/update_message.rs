use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use crate::presentation::state::AppState;

use super::{ApiError, UpdateMessageRequest, UpdatedMessageResponse, parse_message_id};

#[tracing::instrument(skip(state, payload))]
pub async fn update_message_handler(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> Result<Json<UpdatedMessageResponse>, ApiError> {
    let id = parse_message_id(&message_id)?;
    let Json(request) = payload?;

    let message = state.message_service.update(id, request.into()).await?;

    Ok(Json(UpdatedMessageResponse::from(message)))
}
