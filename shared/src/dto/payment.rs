use serde::{Deserialize, Serialize};

/// Body of `POST /payment/intent`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub order_id: u64,
    pub amount: f64,
    pub currency: String,
}

/// Payment intent created by the backend on behalf of the payment provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: f64,
    pub currency: String,
}

/// Body of `POST /payment/confirm`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
    pub order_id: u64,
}

/// Payment state as reported by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Result of a payment confirmation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub order_id: u64,
    pub status: PaymentStatus,
}
