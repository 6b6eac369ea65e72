use chrono::{DateTime, Utc};

use super::{MessageChanges, MessageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Applies the provided fields and refreshes `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn apply_changes(&mut self, changes: &MessageChanges, now: DateTime<Utc>) {
        if let Some(body) = &changes.body {
            self.body = body.clone();
        }
        if let Some(username) = &changes.username {
            self.username = username.clone();
        }
        self.updated_at = now.max(self.updated_at);
    }
}
