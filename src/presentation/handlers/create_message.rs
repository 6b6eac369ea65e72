use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::presentation::state::AppState;

use super::{ApiError, CreateMessageRequest, MessageResponse};

#[tracing::instrument(skip(state, payload))]
pub async fn create_message_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(request) = payload?;

    let message = state
        .message_service
        .create(request.body, request.username)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}
