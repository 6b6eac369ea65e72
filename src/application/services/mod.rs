mod message_service;

pub use message_service::{MessageService, MessageServiceError, SEED_BODY, SEED_USERNAME};
