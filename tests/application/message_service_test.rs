use std::sync::Arc;

use message_board::application::ports::{MessageRepository, RepositoryError};
use message_board::application::services::{
    MessageService, MessageServiceError, SEED_BODY, SEED_USERNAME,
};
use message_board::domain::{Message, MessageChanges, MessageId, NewMessage};
use message_board::infrastructure::persistence::InMemoryMessageRepository;

struct UnavailableRepository;

#[async_trait::async_trait]
impl MessageRepository for UnavailableRepository {
    async fn create(&self, _message: &NewMessage) -> Result<Message, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }

    async fn get_by_id(&self, _id: MessageId) -> Result<Option<Message>, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Message>, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }

    async fn update(
        &self,
        _id: MessageId,
        _changes: &MessageChanges,
    ) -> Result<Option<Message>, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }

    async fn delete(&self, _id: MessageId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
    }
}

fn in_memory_service() -> MessageService {
    MessageService::new(Arc::new(InMemoryMessageRepository::new()))
}

#[tokio::test]
async fn given_body_and_username_when_creating_then_get_returns_same_fields() {
    let service = in_memory_service();

    let created = service
        .create(Some("hi".to_string()), Some("alice".to_string()))
        .await
        .unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn given_missing_body_when_creating_then_missing_field_error() {
    let service = in_memory_service();

    let err = service
        .create(None, Some("alice".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, MessageServiceError::MissingField("body")));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_username_when_creating_then_missing_field_error() {
    let service = in_memory_service();

    let err = service
        .create(Some("hi".to_string()), None)
        .await
        .unwrap_err();

    assert!(matches!(err, MessageServiceError::MissingField("username")));
}

#[tokio::test]
async fn given_empty_strings_when_creating_then_message_is_accepted() {
    let service = in_memory_service();

    let created = service
        .create(Some(String::new()), Some(String::new()))
        .await
        .unwrap();

    assert_eq!(created.body, "");
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_not_found() {
    let service = in_memory_service();

    let err = service.get(MessageId::from_i64(9999)).await.unwrap_err();

    assert!(matches!(err, MessageServiceError::NotFound(id) if id.as_i64() == 9999));
}

#[tokio::test]
async fn given_username_change_when_updating_then_body_is_kept_and_updated_at_advances() {
    let service = in_memory_service();
    let created = service
        .create(Some("hi".to_string()), Some("alice".to_string()))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            MessageChanges {
                body: None,
                username: Some("alicia".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.body, "hi");
    assert_eq!(updated.username, "alicia");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn given_unknown_id_when_updating_or_deleting_then_not_found_and_store_untouched() {
    let service = in_memory_service();
    let existing = service
        .create(Some("keep".to_string()), Some("bob".to_string()))
        .await
        .unwrap();
    let missing = MessageId::from_i64(existing.id.as_i64() + 100);

    let update_err = service
        .update(
            missing,
            MessageChanges {
                body: Some("x".to_string()),
                username: None,
            },
        )
        .await
        .unwrap_err();
    let delete_err = service.delete(missing).await.unwrap_err();

    assert!(matches!(update_err, MessageServiceError::NotFound(_)));
    assert!(matches!(delete_err, MessageServiceError::NotFound(_)));
    assert_eq!(service.list().await.unwrap(), vec![existing]);
}

#[tokio::test]
async fn given_creates_and_deletes_when_listing_then_count_matches() {
    let service = in_memory_service();
    assert!(service.seed_if_empty().await.unwrap());

    let mut ids = Vec::new();
    for i in 0..4 {
        let m = service
            .create(Some(format!("m{i}")), Some("u".to_string()))
            .await
            .unwrap();
        ids.push(m.id);
    }
    service.delete(ids[1]).await.unwrap();
    service.delete(ids[3]).await.unwrap();

    assert_eq!(service.list().await.unwrap().len(), 1 + 4 - 2);
    assert!(matches!(
        service.get(ids[1]).await,
        Err(MessageServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_empty_store_when_seeding_twice_then_only_one_default_row() {
    let service = in_memory_service();

    assert!(service.seed_if_empty().await.unwrap());
    assert!(!service.seed_if_empty().await.unwrap());

    let messages = service.list().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, SEED_BODY);
    assert_eq!(messages[0].username, SEED_USERNAME);
}

#[tokio::test]
async fn given_populated_store_when_seeding_then_nothing_is_inserted() {
    let service = in_memory_service();
    service
        .create(Some("first".to_string()), Some("eve".to_string()))
        .await
        .unwrap();

    assert!(!service.seed_if_empty().await.unwrap());
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn given_unavailable_storage_when_listing_then_storage_error_propagates() {
    let service = MessageService::new(Arc::new(UnavailableRepository));

    let err = service.list().await.unwrap_err();

    assert!(matches!(
        err,
        MessageServiceError::Storage(RepositoryError::ConnectionFailed(_))
    ));
}
