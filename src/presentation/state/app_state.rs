use std::sync::Arc;

use crate::application::services::MessageService;

/// Shared handler state, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<MessageService>,
}

impl AppState {
    pub fn new(message_service: Arc<MessageService>) -> Self {
        Self { message_service }
    }
}
