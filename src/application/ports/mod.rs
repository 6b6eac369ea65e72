mod message_repository;
mod repository_error;

pub use message_repository::MessageRepository;
pub use repository_error::RepositoryError;
