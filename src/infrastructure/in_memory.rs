use crate::domain::navigation::Destination;
use crate::domain::ports::{ClientStorage, Navigator, Notifier, StorageScope};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory client storage with both scopes.
///
/// `Clone` shares the underlying maps, so a handle kept by the caller sees
/// what the controller writes and clears.
#[derive(Default, Clone)]
pub struct InMemoryStorage {
    scopes: Arc<RwLock<HashMap<StorageScope, HashMap<String, String>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held in a scope.
    pub async fn len(&self, scope: StorageScope) -> usize {
        let scopes = self.scopes.read().await;
        scopes.get(&scope).map(HashMap::len).unwrap_or(0)
    }

    pub async fn is_empty(&self) -> bool {
        let scopes = self.scopes.read().await;
        scopes.values().all(HashMap::is_empty)
    }
}

#[async_trait]
impl ClientStorage for InMemoryStorage {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<String>> {
        let scopes = self.scopes.read().await;
        Ok(scopes.get(&scope).and_then(|m| m.get(key)).cloned())
    }

    async fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<()> {
        let mut scopes = self.scopes.write().await;
        scopes
            .entry(scope)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self, scope: StorageScope) -> Result<()> {
        let mut scopes = self.scopes.write().await;
        scopes.remove(&scope);
        Ok(())
    }
}

/// Records every navigation instead of performing it.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    visited: Arc<RwLock<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn visited(&self) -> Vec<Destination> {
        self.visited.read().await.clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, destination: Destination) -> Result<()> {
        self.visited.write().await.push(destination);
        Ok(())
    }
}

/// Collects alert messages.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    alerts: Arc<RwLock<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn alerts(&self) -> Vec<String> {
        self.alerts.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn alert(&self, message: &str) {
        self.alerts.write().await.push(message.to_string());
    }
}
