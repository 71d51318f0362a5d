use crate::error::{CheckoutError, Result};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SESSION_COOKIE: &str = "sessionid";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the storefront backend lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Backend origin, e.g. `http://api.shop.test:8000`.
    pub host: String,
    /// Name of the cookie carrying the server session.
    pub session_cookie_name: String,
    pub timeout: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CheckoutConfig {
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        let host = host.trim_end_matches('/');
        if host.is_empty() {
            return Err(CheckoutError::Config("host must not be empty".to_string()));
        }
        Ok(Self {
            host: host.to_string(),
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.session_cookie_name = name.into();
        self
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
