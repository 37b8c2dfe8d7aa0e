//! Filesystem store: one `<user>.json` document per identity under a data
//! directory. Writes go through a temp file in the same directory and are
//! renamed into place, so a crash never leaves a half-written document.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewSavedResume, SavedResume};
use crate::storage::{push_capped, ResumeStore, StorageError};

pub struct FsResumeStore {
    dir: PathBuf,
    // Serialises read-modify-write cycles across requests. The owned guard
    // travels into the blocking task, so a cancelled request cannot release it early.
    lock: Arc<Mutex<()>>,
}

impl FsResumeStore {
    /// Opens (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        info!("Saved resumes stored under {}", dir.display());
        Ok(Self {
            dir,
            lock: Arc::new(Mutex::new(())),
        })
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(user_id)))
    }

    async fn with_file<T, F>(&self, user_id: &str, op: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Path, &Path) -> Result<T, StorageError> + Send + 'static,
    {
        let guard = self.lock.clone().lock_owned().await;
        let dir = self.dir.clone();
        let path = self.path_for(user_id);
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            op(&dir, &path)
        })
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))?
    }
}

/// Maps an arbitrary identity to a file stem that cannot escape the data dir.
/// Characters outside `[A-Za-z0-9_-]` become `~XX` (hex), which keeps distinct ids distinct.
fn file_stem(user_id: &str) -> String {
    let mut stem = String::with_capacity(user_id.len());
    for byte in user_id.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => stem.push(byte as char),
            other => stem.push_str(&format!("~{other:02x}")),
        }
    }
    stem
}

fn read_all(path: &Path) -> Result<Vec<SavedResume>, StorageError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_all(dir: &Path, path: &Path, resumes: &[SavedResume]) -> Result<(), StorageError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, resumes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl ResumeStore for FsResumeStore {
    async fn list(&self, user_id: &str) -> Result<Vec<SavedResume>, StorageError> {
        self.with_file(user_id, |_, path| read_all(path)).await
    }

    async fn save(
        &self,
        user_id: &str,
        resume: NewSavedResume,
    ) -> Result<SavedResume, StorageError> {
        let saved = self
            .with_file(user_id, move |dir, path| {
                let mut existing = read_all(path)?;
                let saved = push_capped(&mut existing, resume)?;
                write_all(dir, path, &existing)?;
                Ok(saved)
            })
            .await?;
        info!("Saved resume {} for user {}", saved.id, user_id);
        Ok(saved)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> Result<bool, StorageError> {
        let removed = self
            .with_file(user_id, move |dir, path| {
                let mut existing = read_all(path)?;
                let before = existing.len();
                existing.retain(|r| r.id != id);
                if existing.len() == before {
                    return Ok(false);
                }
                write_all(dir, path, &existing)?;
                Ok(true)
            })
            .await?;
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

    #[test]
    fn test_file_stem_is_path_safe() {
        assert_eq!(file_stem("user_2abc-XYZ"), "user_2abc-XYZ");
        assert_eq!(file_stem("../etc/passwd"), "~2e~2e~2fetc~2fpasswd");
        assert_ne!(file_stem("a.b"), file_stem("a_b"));
    }

    #[tokio::test]
    async fn test_saved_resumes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let saved = {
            let store = FsResumeStore::open(dir.path()).unwrap();
            store.save("alice", new_saved("first")).await.unwrap()
        };

        let store = FsResumeStore::open(dir.path()).unwrap();
        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed, vec![saved]);
        assert!(store.list("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cap_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsResumeStore::open(dir.path()).unwrap();
        let mut ids = Vec::new();
        for i in 0..MAX_SAVED_RESUMES {
            ids.push(store.save("alice", new_saved(&format!("r{i}"))).await.unwrap().id);
        }
        assert!(matches!(
            store.save("alice", new_saved("extra")).await.unwrap_err(),
            StorageError::LimitReached { .. }
        ));

        assert!(store.delete("alice", ids[0]).await.unwrap());
        assert!(!store.delete("alice", ids[0]).await.unwrap());
        assert_eq!(store.list("alice").await.unwrap().len(), MAX_SAVED_RESUMES - 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_cancelled_saves_do_not_clobber_later_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FsResumeStore::open(dir.path()).unwrap());

        for round in 0..20 {
            let slow = {
                let store = store.clone();
                tokio::spawn(async move { store.save("alice", new_saved("cancelled")).await })
            };
            tokio::task::yield_now().await;
            slow.abort();

            let kept = store.save("alice", new_saved(&format!("kept-{round}"))).await;
            let listed = store.list("alice").await.unwrap();
            if let Ok(kept) = kept {
                assert!(listed.contains(&kept), "round {round}: confirmed save was lost");
            }
            for saved in listed {
                store.delete("alice", saved.id).await.unwrap();
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_saves_all_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FsResumeStore::open(dir.path()).unwrap());
        let handles: Vec<_> = (0..MAX_SAVED_RESUMES)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.save("alice", new_saved(&format!("r{i}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(store.list("alice").await.unwrap().len(), MAX_SAVED_RESUMES);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("alice.json"), "not json").unwrap();
        let store = FsResumeStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.list("alice").await.unwrap_err(),
            StorageError::Serde(_)
        ));
    }
}
