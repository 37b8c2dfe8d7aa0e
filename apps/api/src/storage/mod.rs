//! Saved-resume persistence — a small per-identity collection capped at
//! [`MAX_SAVED_RESUMES`].
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; the backend is picked at
//! startup from `DATA_DIR`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewSavedResume, SavedResume};

pub mod fs;
pub mod memory;

pub use fs::FsResumeStore;
pub use memory::MemoryResumeStore;

pub const MAX_SAVED_RESUMES: usize = 5;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Maximum of {max} resumes allowed")]
    LimitReached { max: usize },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Saved resumes for one identity, oldest first.
    async fn list(&self, user_id: &str) -> Result<Vec<SavedResume>, StorageError>;

    /// Saves a new entry. Fails with `LimitReached` once the identity holds the maximum.
    async fn save(&self, user_id: &str, resume: NewSavedResume)
        -> Result<SavedResume, StorageError>;

    /// Deletes one entry. Returns false if it did not exist.
    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, StorageError>;
}

/// Appends `resume` to `existing` unless the cap is reached.
fn push_capped(
    existing: &mut Vec<SavedResume>,
    resume: NewSavedResume,
) -> Result<SavedResume, StorageError> {
    if existing.len() >= MAX_SAVED_RESUMES {
        return Err(StorageError::LimitReached {
            max: MAX_SAVED_RESUMES,
        });
    }
    let saved = resume.into_saved();
    existing.push(saved.clone());
    Ok(saved)
}
