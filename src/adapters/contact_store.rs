//! Contact submission stores.
//!
//! `JsonFileContactStore` keeps the whole map in memory and mirrors it to a
//! JSON file. Writes go to a sibling temp file that is renamed over the
//! original, and the in-memory map is swapped only after that succeeds, so a
//! failed write leaves both the file and the visible contents unchanged.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::model::Contact;
use crate::domain::ports::ContactStore;
use crate::utils::error::{Result, SiteError};

type ContactMap = HashMap<String, Contact>;

fn sorted(map: &ContactMap) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = map.values().cloned().collect();
    contacts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    contacts
}

#[derive(Debug, Clone)]
pub struct JsonFileContactStore {
    inner: Arc<RwLock<ContactMap>>,
    file_path: PathBuf,
}

impl JsonFileContactStore {
    /// Opens the store, creating the file (and its directory) when missing.
    /// An unreadable or corrupt file is an error rather than an empty store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                SiteError::storage(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let store = Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            file_path,
        };

        match fs::read(&store.file_path).await {
            Ok(bytes) => {
                let map: ContactMap = serde_json::from_slice(&bytes).map_err(|e| {
                    SiteError::storage(format!(
                        "{} is not a valid contact file: {}",
                        store.file_path.display(),
                        e
                    ))
                })?;
                tracing::info!(
                    "Loaded {} contact submissions from {}",
                    map.len(),
                    store.file_path.display()
                );
                *store.inner.write().await = map;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                store.persist(&HashMap::new()).await?;
            }
            Err(e) => {
                return Err(SiteError::storage(format!(
                    "cannot read {}: {}",
                    store.file_path.display(),
                    e
                )))
            }
        }

        Ok(store)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn persist(&self, map: &ContactMap) -> Result<()> {
        let data = serde_json::to_vec_pretty(map)?;
        let tmp_path = self.file_path.with_extension("json.tmp");

        fs::write(&tmp_path, data)
            .await
            .map_err(|e| SiteError::storage(format!("cannot write {}: {}", tmp_path.display(), e)))?;
        fs::rename(&tmp_path, &self.file_path).await.map_err(|e| {
            SiteError::storage(format!("cannot replace {}: {}", self.file_path.display(), e))
        })?;
        Ok(())
    }

    /// Applies `f` to a copy of the map, persists the copy, then swaps it in.
    async fn commit<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ContactMap) -> T,
    {
        let mut guard = self.inner.write().await;
        let mut next = guard.clone();
        let outcome = f(&mut next);
        self.persist(&next).await?;
        *guard = next;
        Ok(outcome)
    }
}

#[async_trait]
impl ContactStore for JsonFileContactStore {
    async fn insert(&self, contact: Contact) -> Result<()> {
        self.commit(|map| {
            map.insert(contact.id.clone(), contact);
        })
        .await
    }

    async fn list(&self) -> Result<Vec<Contact>> {
        Ok(sorted(&*self.inner.read().await))
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        if !self.inner.read().await.contains_key(id) {
            return Ok(false);
        }
        self.commit(|map| map.remove(id).is_some()).await
    }
}

/// Non-persistent store, selected with `contact.in_memory`.
#[derive(Debug, Clone, Default)]
pub struct MemoryContactStore {
    inner: Arc<RwLock<ContactMap>>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert(&self, contact: Contact) -> Result<()> {
        self.inner.write().await.insert(contact.id.clone(), contact);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Contact>> {
        Ok(sorted(&*self.inner.read().await))
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        Ok(self.inner.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn contact(id: &str, minutes_ago: i64) -> Contact {
        Contact {
            id: id.into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: None,
            subject: None,
            message: "Hello".into(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("contacts.json");

        let store = JsonFileContactStore::open(&path).await.unwrap();
        assert!(path.exists());
        assert!(store.list().await.unwrap().is_empty());

        store.insert(contact("newer", 1)).await.unwrap();
        store.insert(contact("older", 10)).await.unwrap();
        assert!(store.remove("newer").await.unwrap());
        assert!(!store.remove("missing").await.unwrap());
        store.insert(contact("newest", 0)).await.unwrap();

        let reopened = JsonFileContactStore::open(&path).await.unwrap();
        let ids: Vec<String> = reopened.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["older".to_string(), "newest".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_contents_unchanged() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        let store = JsonFileContactStore::open(sub.join("contacts.json"))
            .await
            .unwrap();
        store.insert(contact("kept", 5)).await.unwrap();

        std::fs::remove_dir_all(&sub).unwrap();

        let err = store.insert(contact("lost", 0)).await.unwrap_err();
        assert!(matches!(err, SiteError::StorageError { .. }));
        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["kept".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, b"not json").unwrap();

        let err = JsonFileContactStore::open(&path).await.unwrap_err();
        assert!(matches!(err, SiteError::StorageError { .. }));
    }

    #[tokio::test]
    async fn test_memory_store_orders_by_creation() {
        let store = MemoryContactStore::new();
        store.insert(contact("b", 1)).await.unwrap();
        store.insert(contact("a", 2)).await.unwrap();
        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert!(store.remove("a").await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
