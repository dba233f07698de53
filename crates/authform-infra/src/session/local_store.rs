//! Local key-value stores - the long-lived copy of the session token.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};

use authform_core::ports::{LocalStore, SessionError};

/// In-memory local store.
///
/// Note: Data is lost on process restart.
pub struct InMemoryLocalStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for InMemoryLocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalStore for InMemoryLocalStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self.items.write().await;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Local store persisted as a flat JSON object in a file.
///
/// Survives restarts, which is what a browser's local storage gives a web
/// client. Writes are serialized; each one writes a sibling temp file
/// (owner read/write only on unix) and renames it over the store.
pub struct FileLocalStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let mut items = self.load().await?;
        Ok(items.remove(key))
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, SessionError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                SessionError::Storage(format!("{} is not a JSON object: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(SessionError::Storage(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    async fn write_atomically(&self, bytes: &[u8]) -> Result<(), SessionError> {
        let tmp = self.temp_path();
        let write_err = |e: std::io::Error| {
            SessionError::Storage(format!("failed to write {}: {e}", tmp.display()))
        };

        // A leftover from an interrupted write may carry other permissions.
        match tokio::fs::remove_file(&tmp).await {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(write_err(e)),
            _ => {}
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&tmp).await.map_err(write_err)?;
        file.write_all(bytes).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(SessionError::Storage(format!(
                "failed to replace {}: {e}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileLocalStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());

        let bytes = serde_json::to_vec_pretty(&items)
            .map_err(|e| SessionError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                SessionError::Storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        self.write_atomically(&bytes).await?;

        tracing::debug!(key = %key, path = %self.path.display(), "Local store item written");
        Ok(())
    }
}
