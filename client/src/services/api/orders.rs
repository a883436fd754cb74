//! # Order Endpoints

use lib_utils::validate_not_empty;
use shared::{CreateOrderRequest, Order};

use super::client::ApiClient;
use super::http::PendingRequest;
use crate::core::error::{AppError, Result};

/// Place an order.
#[tracing::instrument(skip(client, request), fields(user_id = request.user_id, items = request.items.len()))]
pub async fn create_order(client: &ApiClient, request: &CreateOrderRequest) -> Result<Order> {
    if request.items.is_empty() {
        return Err(AppError::Validation("Order must contain at least one item".to_string()));
    }
    if request.items.iter().any(|item| item.quantity == 0) {
        return Err(AppError::Validation("Quantity must be at least 1".to_string()));
    }
    validate_not_empty(&request.delivery_address, "Delivery address").map_err(AppError::Validation)?;

    let order: Order = client.post("/orders", request).await?;
    tracing::info!(order_id = order.id, total = order.total, "Order placed");
    Ok(order)
}

/// Order history of a user, newest first as returned by the backend.
#[tracing::instrument(skip(client))]
pub async fn get_orders(client: &ApiClient, user_id: u64) -> Result<Vec<Order>> {
    client
        .send(PendingRequest::get("/orders").query("userId", user_id))
        .await
}

#[tracing::instrument(skip(client))]
pub async fn get_order(client: &ApiClient, order_id: u64) -> Result<Order> {
    client.get(&format!("/orders/{}", order_id)).await
}

/// Cancel an order. The backend refuses once preparation has started.
#[tracing::instrument(skip(client))]
pub async fn cancel_order(client: &ApiClient, order_id: u64) -> Result<Order> {
    client
        .send(PendingRequest::put(format!("/orders/{}/cancel", order_id)))
        .await
}
