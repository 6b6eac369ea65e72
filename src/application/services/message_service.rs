use std::sync::Arc;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{Message, MessageChanges, MessageId, NewMessage};

pub const SEED_BODY: &str = "Seed message";
pub const SEED_USERNAME: &str = "Seeder";

pub struct MessageService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// Creates a message once both fields are present. Empty strings are accepted.
    pub async fn create(
        &self,
        body: Option<String>,
        username: Option<String>,
    ) -> Result<Message, MessageServiceError> {
        let body = body.ok_or(MessageServiceError::MissingField("body"))?;
        let username = username.ok_or(MessageServiceError::MissingField("username"))?;

        let message = self
            .repository
            .create(&NewMessage::new(body, username))
            .await?;

        tracing::info!(message_id = %message.id, "Message created");
        Ok(message)
    }

    pub async fn get(&self, id: MessageId) -> Result<Message, MessageServiceError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(MessageServiceError::NotFound(id))
    }

    pub async fn list(&self) -> Result<Vec<Message>, MessageServiceError> {
        Ok(self.repository.list_all().await?)
    }

    pub async fn update(
        &self,
        id: MessageId,
        changes: MessageChanges,
    ) -> Result<Message, MessageServiceError> {
        if changes.is_empty() {
            tracing::debug!(message_id = %id, "Empty update, refreshing timestamp only");
        }

        let message = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or(MessageServiceError::NotFound(id))?;

        tracing::info!(message_id = %id, "Message updated");
        Ok(message)
    }

    pub async fn delete(&self, id: MessageId) -> Result<(), MessageServiceError> {
        if !self.repository.delete(id).await? {
            return Err(MessageServiceError::NotFound(id));
        }

        tracing::info!(message_id = %id, "Message deleted");
        Ok(())
    }

    /// Inserts the default row when the store is empty. Returns whether a row was inserted.
    pub async fn seed_if_empty(&self) -> Result<bool, MessageServiceError> {
        if self.repository.count().await? > 0 {
            return Ok(false);
        }

        let seed = self
            .repository
            .create(&NewMessage::new(SEED_BODY, SEED_USERNAME))
            .await?;

        tracing::info!(message_id = %seed.id, "Seeded default message");
        Ok(true)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessageServiceError {
    #[error("Message not found")]
    NotFound(MessageId),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("storage failure: {0}")]
    Storage(#[from] RepositoryError),
}
