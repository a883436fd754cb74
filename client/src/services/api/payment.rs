//! # Payment Endpoints
//!
//! The backend talks to the payment provider; the client only creates an
//! intent and confirms it once the provider has collected the card.

use lib_utils::{validate_not_empty, validate_positive};
use shared::{
    ConfirmPaymentRequest, CreatePaymentIntentRequest, PaymentConfirmation, PaymentIntent,
};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Create a payment intent for an order.
#[tracing::instrument(skip(client))]
pub async fn create_payment_intent(
    client: &ApiClient,
    order_id: u64,
    amount: f64,
    currency: &str,
) -> Result<PaymentIntent> {
    validate_positive(amount, "Amount").map_err(AppError::Validation)?;
    validate_not_empty(currency, "Currency").map_err(AppError::Validation)?;

    let request = CreatePaymentIntentRequest {
        order_id,
        amount,
        currency: currency.to_lowercase(),
    };
    let intent: PaymentIntent = client.post("/payment/intent", &request).await?;
    tracing::info!(payment_intent_id = %intent.id, "Payment intent created");
    Ok(intent)
}

/// Confirm a payment after the provider flow completed.
#[tracing::instrument(skip(client))]
pub async fn confirm_payment(
    client: &ApiClient,
    payment_intent_id: &str,
    order_id: u64,
) -> Result<PaymentConfirmation> {
    validate_not_empty(payment_intent_id, "Payment intent id").map_err(AppError::Validation)?;

    let request = ConfirmPaymentRequest {
        payment_intent_id: payment_intent_id.to_string(),
        order_id,
    };
    let confirmation: PaymentConfirmation = client.post("/payment/confirm", &request).await?;
    tracing::info!(status = ?confirmation.status, "Payment confirmed");
    Ok(confirmation)
}
