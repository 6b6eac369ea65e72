use async_trait::async_trait;

use crate::domain::{Message, MessageChanges, MessageId, NewMessage};

use super::RepositoryError;

/// Durable storage for message rows.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts a row, assigning its id and stamping both timestamps with the same instant.
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError>;

    async fn get_by_id(&self, id: MessageId) -> Result<Option<Message>, RepositoryError>;

    /// Every row, in insertion order.
    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError>;

    /// Applies the provided fields and refreshes `updated_at`. `Ok(None)` if the id is absent.
    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, RepositoryError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;
}
