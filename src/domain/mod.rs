mod message;
mod message_changes;
mod message_id;
mod new_message;

pub use message::Message;
pub use message_changes::MessageChanges;
pub use message_id::MessageId;
pub use new_message::NewMessage;
