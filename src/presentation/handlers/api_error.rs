use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::MessageServiceError;

/// Storage details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every message handler; always rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<MessageServiceError> for ApiError {
    fn from(e: MessageServiceError) -> Self {
        match e {
            MessageServiceError::NotFound(id) => {
                tracing::debug!(message_id = %id, "Message not found");
                ApiError::new(StatusCode::NOT_FOUND, e.to_string())
            }
            MessageServiceError::MissingField(field) => {
                tracing::warn!(field, "Rejected message without required field");
                ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            MessageServiceError::Storage(ref inner) => {
                tracing::error!(error = %inner, "Message storage failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "Rejected request body");
        ApiError::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
