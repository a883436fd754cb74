//! # Cart Endpoints
//!
//! The cart lives server-side and is keyed by user id.

use shared::{AddToCartRequest, CartItem, UpdateCartItemRequest};

use super::client::ApiClient;
use super::http::PendingRequest;
use crate::core::error::{AppError, Result};

/// Fetch the user's cart.
#[tracing::instrument(skip(client))]
pub async fn get_cart(client: &ApiClient, user_id: u64) -> Result<Vec<CartItem>> {
    client
        .send(PendingRequest::get("/cart").query("userId", user_id))
        .await
}

/// Add `quantity` of a dish to the cart and return the updated line.
#[tracing::instrument(skip(client))]
pub async fn add_to_cart(
    client: &ApiClient,
    user_id: u64,
    dish_id: u64,
    quantity: u32,
) -> Result<CartItem> {
    validate_quantity(quantity)?;
    let request = AddToCartRequest {
        user_id,
        dish_id,
        quantity,
    };
    let item: CartItem = client.post("/cart", &request).await?;
    tracing::info!(cart_item_id = item.id, "Added to cart");
    Ok(item)
}

/// Change the quantity of a cart line. Use [`remove_from_cart`] to drop it.
#[tracing::instrument(skip(client))]
pub async fn update_cart_item(client: &ApiClient, item_id: u64, quantity: u32) -> Result<CartItem> {
    validate_quantity(quantity)?;
    client
        .put(&format!("/cart/{}", item_id), &UpdateCartItemRequest { quantity })
        .await
}

#[tracing::instrument(skip(client))]
pub async fn remove_from_cart(client: &ApiClient, item_id: u64) -> Result<()> {
    client.delete(&format!("/cart/{}", item_id)).await
}

/// Empty the user's cart (after checkout, for instance).
#[tracing::instrument(skip(client))]
pub async fn clear_cart(client: &ApiClient, user_id: u64) -> Result<()> {
    client
        .send(PendingRequest::delete("/cart").query("userId", user_id))
        .await
}

fn validate_quantity(quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(AppError::Validation("Quantity must be at least 1".to_string()));
    }
    Ok(())
}
