use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{Message, MessageChanges, MessageId, NewMessage};

/// Process-local store with the same id and timestamp rules as the SQLite one.
pub struct InMemoryMessageRepository {
    state: RwLock<State>,
}

struct State {
    rows: BTreeMap<MessageId, Message>,
    next_id: i64,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let mut state = self.state.write().await;
        let now = Utc::now();
        let id = MessageId::from_i64(state.next_id);
        state.next_id += 1;

        let created = Message {
            id,
            body: message.body.clone(),
            username: message.username.clone(),
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, created.clone());

        Ok(created)
    }

    async fn get_by_id(&self, id: MessageId) -> Result<Option<Message>, RepositoryError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, RepositoryError> {
        let mut state = self.state.write().await;

        Ok(state.rows.get_mut(&id).map(|message| {
            message.apply_changes(changes, Utc::now());
            message.clone()
        }))
    }

    async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.state.read().await.rows.len() as u64)
    }
}
