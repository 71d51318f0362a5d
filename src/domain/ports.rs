use super::navigation::Destination;
use super::order::{CommitRequest, CommitResponse};
use super::settlement::SettlementContext;
use crate::error::Result;
use async_trait::async_trait;

/// The two order endpoints the checkout page calls.
///
/// Implementations must map an HTTP 401 to `CheckoutError::Unauthenticated`.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn fetch_settlement(&self) -> Result<SettlementContext>;
    async fn commit_order(&self, request: CommitRequest) -> Result<CommitResponse>;
}

#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, destination: Destination) -> Result<()>;
}

/// Client-held key/value storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Lives as long as the browsing session.
    Session,
    /// Persists across sessions.
    Local,
}

#[async_trait]
pub trait ClientStorage: Send + Sync {
    async fn get(&self, scope: StorageScope, key: &str) -> Result<Option<String>>;
    async fn set(&self, scope: StorageScope, key: &str, value: &str) -> Result<()>;
    async fn clear(&self, scope: StorageScope) -> Result<()>;
}

/// Blocking user-facing alerts.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn alert(&self, message: &str);
}

pub type OrdersApiBox = Box<dyn OrdersApi>;
pub type NavigatorBox = Box<dyn Navigator>;
pub type ClientStorageBox = Box<dyn ClientStorage>;
pub type NotifierBox = Box<dyn Notifier>;
