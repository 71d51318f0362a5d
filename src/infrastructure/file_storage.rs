use crate::domain::ports::{ClientStorage, StorageScope};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const SESSION_FILE: &str = "session.json";
pub const LOCAL_FILE: &str = "local.json";

/// Client storage persisted as one JSON object per scope.
///
/// Both scopes live under a single directory so that a command-line user
/// keeps their session between invocations. Writes go through a mutex so
/// concurrent `set` calls on the same scope do not lose keys.
#[derive(Clone)]
pub struct FileStorage {
    dir: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Arc::new(Mutex::new(())),
        })
    }

    fn path(&self, scope: StorageScope) -> PathBuf {
        match scope {
            StorageScope::Session => self.dir.join(SESSION_FILE),
            StorageScope::Local => self.dir.join(LOCAL_FILE),
        }
    }

    async fn read_scope(&self, scope: StorageScope) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read(self.path(scope)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ClientStorage for FileStorage {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_scope(scope).await?.remove(key))
    }

    async fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_scope(scope).await?;
        entries.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&entries)?;
        tokio::fs::write(self.path(scope), bytes).await?;
        Ok(())
    }

    async fn clear(&self, scope: StorageScope) -> Result<()> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(self.path(scope)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
