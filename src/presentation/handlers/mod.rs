mod api_error;
mod create_message;
mod delete_message;
mod get_message;
mod health;
mod list_messages;
mod message_payloads;
mod update_message;

pub use api_error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use create_message::create_message_handler;
pub use delete_message::{DELETED_CONFIRMATION, delete_message_handler};
pub use get_message::get_message_handler;
pub use health::health_handler;
pub use list_messages::list_messages_handler;
pub use message_payloads::{
    CreateMessageRequest, DeleteMessageResponse, MessageResponse, UpdateMessageRequest,
    UpdatedMessageResponse, parse_message_id,
};
pub use update_message::update_message_handler;
