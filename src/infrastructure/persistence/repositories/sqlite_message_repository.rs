use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use crate::application::ports::{MessageRepository, RepositoryError};
use crate::domain::{Message, MessageChanges, MessageId, NewMessage};

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    body: String,
    username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message {
            id: MessageId::from_i64(r.id),
            body: r.body,
            username: r.username,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Current time at the precision stored in the table.
fn storage_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

// Fixed-width UTC text, so SQLite can order timestamps lexicographically.
fn to_storage_text(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    #[instrument(skip(self, message), fields(username = %message.username))]
    async fn create(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let now = storage_now();
        let stamp = to_storage_text(now);

        let result = sqlx::query(
            r#"
            INSERT INTO messages (body, username, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&message.body)
        .bind(&message.username)
        .bind(&stamp)
        .bind(&stamp)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Message {
            id: MessageId::from_i64(result.last_insert_rowid()),
            body: message.body.clone(),
            username: message.username.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    #[instrument(skip(self), fields(message_id = %id))]
    async fn get_by_id(&self, id: MessageId) -> Result<Option<Message>, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, body, username, created_at, updated_at
            FROM messages
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, body, username, created_at, updated_at
            FROM messages
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, changes), fields(message_id = %id))]
    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, RepositoryError> {
        // Single statement: overlapping writers wait on the busy timeout.
        // MAX keeps updated_at from moving backwards.
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            UPDATE messages
            SET body = COALESCE(?, body),
                username = COALESCE(?, username),
                updated_at = MAX(updated_at, ?)
            WHERE id = ?
            RETURNING id, body, username, created_at, updated_at
            "#,
        )
        .bind(changes.body.as_deref())
        .bind(changes.username.as_deref())
        .bind(to_storage_text(storage_now()))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.map(Message::from))
    }

    #[instrument(skip(self), fields(message_id = %id))]
    async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(count.max(0) as u64)
    }
}
