//! # Dish Endpoints

use shared::{Dish, DishQuery};

use super::client::ApiClient;
use super::http::PendingRequest;
use crate::core::error::Result;

/// List dishes, optionally filtered by category and search text.
#[tracing::instrument(skip(client))]
pub async fn get_dishes(client: &ApiClient, query: &DishQuery) -> Result<Vec<Dish>> {
    let request = PendingRequest::get("/dishes").query_pairs(query.to_pairs());
    let dishes: Vec<Dish> = client.send(request).await?;
    tracing::debug!(count = dishes.len(), "Fetched dishes");
    Ok(dishes)
}

/// Fetch a single dish.
#[tracing::instrument(skip(client))]
pub async fn get_dish(client: &ApiClient, dish_id: u64) -> Result<Dish> {
    client.get(&format!("/dishes/{}", dish_id)).await
}
