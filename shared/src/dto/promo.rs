use serde::{Deserialize, Serialize};

/// Body of `POST /promo/validate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePromoRequest {
    pub code: String,
    pub order_total: f64,
}

/// Outcome of a promo code check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoValidation {
    pub code: String,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
}

impl PromoValidation {
    /// Total after applying the discount, never below zero.
    pub fn apply(&self, order_total: f64) -> f64 {
        if !self.valid {
            return order_total;
        }
        let discounted = match (self.discount_amount, self.discount_percent) {
            (Some(amount), _) => order_total - amount,
            (None, Some(percent)) => order_total * (1.0 - percent / 100.0),
            (None, None) => order_total,
        };
        discounted.max(0.0)
    }
}
