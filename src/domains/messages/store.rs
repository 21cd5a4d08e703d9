use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Message, MessageDraft};

/// Errors produced by store lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Message with id {0} not found")]
    NotFound(String),
}

/// In-memory message store
///
/// Lives for the whole process; entries are never evicted, enumerated or
/// deleted. Access is serialized through an async RwLock, so concurrent
/// updates to the same id are last-write-wins.
pub struct MessageStore {
    messages: Arc<RwLock<HashMap<String, MessageDraft>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a draft under a freshly generated id and return the composed
    /// message.
    pub async fn create(&self, draft: MessageDraft) -> Message {
        // 32 hex chars of cryptographically random identifier; collisions
        // are treated as negligible.
        let id = Uuid::new_v4().simple().to_string();
        let mut messages = self.messages.write().await;
        messages.insert(id.clone(), draft.clone());
        compose(id, draft)
    }

    /// Get the message stored under `id`
    pub async fn get(&self, id: &str) -> Result<Message, StoreError> {
        let messages = self.messages.read().await;
        let draft = messages
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        Ok(compose(id.to_owned(), draft.clone()))
    }

    /// Replace the message stored under `id` wholesale
    ///
    /// Fields absent from `draft` do not survive; there is no merge.
    pub async fn update(&self, id: &str, draft: MessageDraft) -> Result<Message, StoreError> {
        let mut messages = self.messages.write().await;
        if !messages.contains_key(id) {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        messages.insert(id.to_owned(), draft.clone());
        Ok(compose(id.to_owned(), draft))
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn compose(id: String, draft: MessageDraft) -> Message {
    Message {
        id: juniper::ID::new(id),
        content: draft.content,
        author: draft.author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str, author: &str) -> MessageDraft {
        MessageDraft {
            content: content.to_owned(),
            author: author.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MessageStore::new();

        let created = store.create(draft("hi", "a")).await;
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.content, "hi");
        assert_eq!(fetched.author, "a");
    }

    #[tokio::test]
    async fn test_repeated_reads_do_not_mutate() {
        let store = MessageStore::new();
        let created = store.create(draft("hi", "a")).await;

        for _ in 0..3 {
            let fetched = store.get(&created.id).await.unwrap();
            assert_eq!(fetched.content, "hi");
            assert_eq!(fetched.author, "a");
        }
    }

    #[tokio::test]
    async fn test_get_missing_id_fails() {
        let store = MessageStore::new();

        let err = store.get("nonexistent").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("nonexistent".to_owned()));
        assert!(err.to_string().contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale() {
        let store = MessageStore::new();
        let created = store.create(draft("old", "a")).await;

        let updated = store.update(&created.id, draft("new", "b")).await.unwrap();
        assert_eq!(updated.content, "new");
        assert_eq!(updated.author, "b");

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched.content, "new");
        assert_eq!(fetched.author, "b");
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let store = MessageStore::new();

        let err = store.update("missing", draft("new", "b")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("missing".to_owned()));
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique_fixed_length_hex() {
        let store = MessageStore::new();

        let first = store.create(draft("one", "a")).await;
        let second = store.create(draft("two", "a")).await;
        assert_ne!(first.id, second.id);

        for message in [first, second] {
            let id = message.id.to_string();
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
