use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::{Message, MessageChanges, MessageId};

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub body: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub body: Option<String>,
    pub username: Option<String>,
}

impl From<UpdateMessageRequest> for MessageChanges {
    fn from(r: UpdateMessageRequest) -> Self {
        MessageChanges {
            body: r.body,
            username: r.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.as_i64(),
            body: m.body,
            username: m.username,
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.to_rfc3339(),
        }
    }
}

/// PATCH reply; timestamps are left out.
#[derive(Debug, Serialize)]
pub struct UpdatedMessageResponse {
    pub id: i64,
    pub body: String,
    pub username: String,
}

impl From<Message> for UpdatedMessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.as_i64(),
            body: m.body,
            username: m.username,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteMessageResponse {
    pub message: String,
}

pub fn parse_message_id(raw: &str) -> Result<MessageId, ApiError> {
    raw.parse::<MessageId>().map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid message ID: {}", raw),
        )
    })
}
