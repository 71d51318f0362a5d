#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use storefront_checkout::domain::money::Money;
use storefront_checkout::domain::order::{CommitRequest, CommitResponse};
use storefront_checkout::domain::ports::OrdersApi;
use storefront_checkout::domain::settlement::{Address, SettlementContext, Sku};
use storefront_checkout::error::{CheckoutError, Result};
use tokio::sync::{Mutex, Notify};

pub fn sku(id: u64, price: Money, count: u32) -> Sku {
    Sku {
        id,
        name: Some(format!("sku-{}", id)),
        default_image_url: None,
        price,
        count,
        amount: None,
    }
}

/// skus [10.00 x 2, 5.50 x 1], freight 3, two addresses.
pub fn sample_context() -> SettlementContext {
    SettlementContext {
        skus: vec![
            sku(1, Money::new(dec!(10.00)), 2),
            sku(2, Money::new(dec!(5.50)), 1),
        ],
        freight: Money::new(dec!(3)),
        addresses: vec![
            Address {
                id: Some(11),
                receiver: Some("Wang".to_string()),
                ..Default::default()
            },
            Address {
                id: Some(12),
                receiver: Some("Zhao".to_string()),
                ..Default::default()
            },
        ],
    }
}

pub enum SettlementReply {
    Ok(SettlementContext),
    Unauthorized,
    Fail,
}

pub enum CommitReply {
    Ok(String),
    Fail(String),
}

/// An `OrdersApi` double with canned replies and call counters.
///
/// When `hold_commits` is set, every commit waits on `release` before
/// replying, so tests can observe the in-flight window.
#[derive(Clone)]
pub struct ScriptedOrdersApi {
    settlement: Arc<Mutex<SettlementReply>>,
    commit: Arc<Mutex<CommitReply>>,
    pub settlement_calls: Arc<AtomicUsize>,
    pub commit_calls: Arc<AtomicUsize>,
    pub commit_requests: Arc<Mutex<Vec<CommitRequest>>>,
    hold_commits: bool,
    pub release: Arc<Notify>,
    pub commit_started: Arc<Notify>,
}

impl ScriptedOrdersApi {
    pub fn new(settlement: SettlementReply, commit: CommitReply) -> Self {
        Self {
            settlement: Arc::new(Mutex::new(settlement)),
            commit: Arc::new(Mutex::new(commit)),
            settlement_calls: Arc::new(AtomicUsize::new(0)),
            commit_calls: Arc::new(AtomicUsize::new(0)),
            commit_requests: Arc::new(Mutex::new(Vec::new())),
            hold_commits: false,
            release: Arc::new(Notify::new()),
            commit_started: Arc::new(Notify::new()),
        }
    }

    pub fn holding_commits(mut self) -> Self {
        self.hold_commits = true;
        self
    }

    pub async fn set_commit(&self, reply: CommitReply) {
        *self.commit.lock().await = reply;
    }

    pub fn commits(&self) -> usize {
        self.commit_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrdersApi for ScriptedOrdersApi {
    async fn fetch_settlement(&self) -> Result<SettlementContext> {
        self.settlement_calls.fetch_add(1, Ordering::SeqCst);
        match &*self.settlement.lock().await {
            SettlementReply::Ok(context) => Ok(context.clone()),
            SettlementReply::Unauthorized => Err(CheckoutError::Unauthenticated),
            SettlementReply::Fail => Err(CheckoutError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "backend down".to_string(),
            }),
        }
    }

    async fn commit_order(&self, request: CommitRequest) -> Result<CommitResponse> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        self.commit_requests.lock().await.push(request);
        if self.hold_commits {
            self.commit_started.notify_one();
            self.release.notified().await;
        }
        match &*self.commit.lock().await {
            CommitReply::Ok(order_id) => Ok(CommitResponse {
                order_id: order_id.clone(),
            }),
            CommitReply::Fail(message) => Err(CheckoutError::Status {
                status: StatusCode::BAD_REQUEST,
                body: message.clone(),
            }),
        }
    }
}
