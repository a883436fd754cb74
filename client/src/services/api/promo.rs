//! # Promo Code Endpoints

use lib_utils::validate_not_empty;
use shared::{PromoValidation, ValidatePromoRequest};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Check a promo code against an order total.
///
/// Codes are sent trimmed and upper-cased.
#[tracing::instrument(skip(client))]
pub async fn validate_promo(client: &ApiClient, code: &str, order_total: f64) -> Result<PromoValidation> {
    validate_not_empty(code, "Promo code").map_err(AppError::Validation)?;

    let request = ValidatePromoRequest {
        code: code.trim().to_uppercase(),
        order_total,
    };
    client.post("/promo/validate", &request).await
}
