use crate::config::CheckoutConfig;
use crate::domain::order::{CommitRequest, CommitResponse};
use crate::domain::ports::OrdersApi;
use crate::domain::settlement::{SettlementContext, SettlementResponse};
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

pub const SETTLEMENT_PATH: &str = "/orders/settlement/";
pub const COMMIT_PATH: &str = "/orders/commit/";

/// `OrdersApi` over HTTP.
///
/// Requests carry the server session cookie from a cookie jar scoped to the
/// configured host, the way a browser sends credentials with
/// `withCredentials`.
#[derive(Clone)]
pub struct HttpOrdersApi {
    client: Client,
    config: CheckoutConfig,
}

impl HttpOrdersApi {
    /// Builds the client. `session` is the value of the session cookie, if
    /// the user has one.
    pub fn new(config: CheckoutConfig, session: Option<&str>) -> Result<Self> {
        let host = Url::parse(&config.host)
            .map_err(|e| CheckoutError::Config(format!("invalid host {}: {}", config.host, e)))?;

        let jar = Arc::new(Jar::default());
        if let Some(value) = session {
            jar.add_cookie_str(
                &format!("{}={}; Path=/", config.session_cookie_name, value),
                &host,
            );
        }

        let client = Client::builder()
            .cookie_provider(jar)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CheckoutError::Unauthenticated);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Status { status, body });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl OrdersApi for HttpOrdersApi {
    async fn fetch_settlement(&self) -> Result<SettlementContext> {
        let url = self.config.endpoint(SETTLEMENT_PATH);
        debug!(%url, "GET settlement");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body: SettlementResponse = Self::read_json(response).await?;
        Ok(body.context)
    }

    async fn commit_order(&self, request: CommitRequest) -> Result<CommitResponse> {
        let url = self.config.endpoint(COMMIT_PATH);
        debug!(%url, address = request.address, pay_method = %request.pay_method, "POST commit");
        let response = self.client.post(&url).json(&request).send().await?;
        Self::read_json(response).await
    }
}
