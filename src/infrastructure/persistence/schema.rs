use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

// AUTOINCREMENT keeps ids of deleted rows from being handed out again.
const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        body        TEXT NOT NULL,
        username    TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )
"#;

/// Creates the `messages` table if it does not exist yet.
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(CREATE_MESSAGES_TABLE)
        .execute(pool)
        .await
        .map_err(|e| RepositoryError::SchemaFailed(e.to_string()))?;

    info!("Messages table ready");
    Ok(())
}
