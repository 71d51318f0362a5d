use super::money::Money;
use serde::{Deserialize, Serialize};

/// A cart line item as returned by the settlement endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default_image_url: Option<String>,
    pub price: Money,
    pub count: u32,
    /// `price × count` rounded to cents. Attached once while the summary is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl Sku {
    pub fn line_amount(&self) -> Money {
        (self.price * self.count).round_cents()
    }
}

/// A saved delivery address.
///
/// The page treats addresses as opaque and refers to them by index; the
/// commonly present fields are typed, anything else is kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Address {
    /// One-line human readable form, skipping missing parts.
    pub fn label(&self) -> String {
        let region: Vec<&str> = [&self.province, &self.city, &self.district, &self.place]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        match &self.receiver {
            Some(receiver) => format!("{} {}", receiver, region.join(" ")).trim().to_string(),
            None => region.join(" "),
        }
    }
}

/// Body of `GET /orders/settlement/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementResponse {
    pub context: SettlementContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettlementContext {
    #[serde(default)]
    pub skus: Vec<Sku>,
    #[serde(default)]
    pub freight: Money,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// The settlement as shown on the checkout page, with derived totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementSummary {
    pub skus: Vec<Sku>,
    pub freight: Money,
    pub addresses: Vec<Address>,
    pub total_count: u64,
    pub total_amount: Money,
    pub payment_amount: Money,
}

impl SettlementSummary {
    /// Attaches each line amount and derives the totals.
    ///
    /// Line amounts are rounded to cents before they are summed, and the
    /// payment amount is `freight + total_amount` rounded to cents.
    pub fn from_context(context: SettlementContext) -> Self {
        let mut skus = context.skus;
        let mut total_count = 0u64;
        let mut total_amount = Money::ZERO;

        for sku in skus.iter_mut() {
            let amount = sku.line_amount();
            sku.amount = Some(amount);
            total_count += u64::from(sku.count);
            total_amount += amount;
        }

        Self {
            skus,
            freight: context.freight,
            addresses: context.addresses,
            total_count,
            total_amount: total_amount.round_cents(),
            payment_amount: (context.freight + total_amount).round_cents(),
        }
    }
}
