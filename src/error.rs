use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Address index {index} out of range ({available} addresses)")]
    InvalidSelection { index: usize, available: usize },
    #[error("Unknown payment method: {0}")]
    InvalidPayMethod(u8),
    #[error("An order submission is already in flight")]
    SubmitInFlight,
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The two failure classes the checkout page reacts to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The session is missing or expired; recovered by sending the user to the login page.
    Unauthenticated,
    /// Everything else.
    Unclassified,
}

impl CheckoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::Unauthenticated => ErrorKind::Unauthenticated,
            _ => ErrorKind::Unclassified,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
