use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of an order as the payment provider reports it. Carried for display and
/// audit only; never persisted by the order store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaypalOrderDetails {
    pub id: String,
    pub intent: String,
    pub status: String,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
    pub create_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseUnit {
    pub reference_id: String,
    pub amount: Amount,
    pub payee: Payee,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payee {
    pub email_address: String,
    pub merchant_id: String,
}
