use crate::error::CheckoutError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Payment method codes understood by `/orders/commit/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayMethod {
    #[default]
    CashOnDelivery,
    Alipay,
}

impl PayMethod {
    pub fn code(self) -> u8 {
        match self {
            PayMethod::CashOnDelivery => 1,
            PayMethod::Alipay => 2,
        }
    }
}

impl TryFrom<u8> for PayMethod {
    type Error = CheckoutError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PayMethod::CashOnDelivery),
            2 => Ok(PayMethod::Alipay),
            other => Err(CheckoutError::InvalidPayMethod(other)),
        }
    }
}

impl fmt::Display for PayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for PayMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for PayMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        PayMethod::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// Body of `POST /orders/commit/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitRequest {
    /// Index of the chosen address in the settlement's address list.
    pub address: usize,
    pub pay_method: PayMethod,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitResponse {
    #[serde(deserialize_with = "deserialize_order_id")]
    pub order_id: String,
}

// Order ids are long digit strings on the backend but some deployments send them as numbers.
fn deserialize_order_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "order_id must be a string or number, got {}",
            other
        ))),
    }
}
