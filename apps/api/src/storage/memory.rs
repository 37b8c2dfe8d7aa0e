use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewSavedResume, SavedResume};
use crate::storage::{push_capped, ResumeStore, StorageError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryResumeStore {
    inner: RwLock<HashMap<String, Vec<SavedResume>>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn list(&self, user_id: &str) -> Result<Vec<SavedResume>, StorageError> {
        Ok(self.inner.read().await.get(user_id).cloned().unwrap_or_default())
    }

    async fn save(
        &self,
        user_id: &str,
        resume: NewSavedResume,
    ) -> Result<SavedResume, StorageError> {
        let mut inner = self.inner.write().await;
        let saved = push_capped(inner.entry(user_id.to_string()).or_default(), resume)?;
        info!("Saved resume {} for user {}", saved.id, user_id);
        Ok(saved)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, StorageError> {
        let mut inner = self.inner.write().await;
        let Some(saved) = inner.get_mut(user_id) else {
            return Ok(false);
        };
        let before = saved.len();
        saved.retain(|r| r.id != id);
        let removed = saved.len() != before;
        if removed {
            info!("Deleted resume {} for user {}", id, user_id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::new_saved;
    use crate::storage::MAX_SAVED_RESUMES;

    #[tokio::test]
    async fn test_save_and_list_per_user() {
        let store = MemoryResumeStore::new();
        store.save("alice", new_saved("first")).await.unwrap();
        store.save("alice", new_saved("second")).await.unwrap();
        store.save("bob", new_saved("other")).await.unwrap();

        let names: Vec<String> = store
            .list("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(store.list("bob").await.unwrap().len(), 1);
        assert!(store.list("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cap_is_enforced() {
        let store = MemoryResumeStore::new();
        for i in 0..MAX_SAVED_RESUMES {
            store.save("alice", new_saved(&format!("r{i}"))).await.unwrap();
        }
        let err = store.save("alice", new_saved("one too many")).await.unwrap_err();
        assert!(matches!(err, StorageError::LimitReached { max: 5 }));
    }

    #[tokio::test]
    async fn test_delete_frees_a_slot() {
        let store = MemoryResumeStore::new();
        let mut ids = Vec::new();
        for i in 0..MAX_SAVED_RESUMES {
            ids.push(store.save("alice", new_saved(&format!("r{i}"))).await.unwrap().id);
        }
        assert!(store.delete("alice", ids[2]).await.unwrap());
        assert!(!store.delete("alice", ids[2]).await.unwrap());
        assert!(!store.delete("bob", ids[0]).await.unwrap());
        assert!(store.save("alice", new_saved("again")).await.is_ok());
    }
}
