use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;

/// A keyed blob medium the roster store persists through. Implementations
/// report absence as `Ok(None)`; an `Err` marks the whole backend as
/// unreachable and triggers the store's fallback handling.
#[async_trait]
pub trait BlobBackend: Send + Sync {
    /// Short label used in log messages.
    fn name(&self) -> &str;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;
}

/// Local-disk backend: each key becomes a JSON file under the root directory.
pub struct FsBackend {
    root: PathBuf,
    label: String,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let label = format!("fs:{}", root.display());
        Self { root, label }
    }

    fn path_for(&self, key: &str) -> io::Result<PathBuf> {
        let relative = Path::new(key);
        let traversal = relative.components().any(|c| {
            !matches!(c, Component::Normal(_)) // rejects "..", "/", "C:\"
        });
        if key.is_empty() || traversal {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid blob key: {key:?}"),
            ));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl BlobBackend for FsBackend {
    fn name(&self) -> &str {
        &self.label
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory backend, used as the durable key-value double in tests.
#[derive(Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BlobBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.lock().get(key).cloned())
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}
