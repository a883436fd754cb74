//! # Category Endpoints

use shared::Category;

use super::client::ApiClient;
use crate::core::error::Result;

/// List all menu categories.
#[tracing::instrument(skip(client))]
pub async fn get_categories(client: &ApiClient) -> Result<Vec<Category>> {
    let categories: Vec<Category> = client.get("/categories").await?;
    tracing::debug!(count = categories.len(), "Fetched categories");
    Ok(categories)
}

/// Fetch a single category.
#[tracing::instrument(skip(client))]
pub async fn get_category(client: &ApiClient, category_id: u64) -> Result<Category> {
    client.get(&format!("/categories/{}", category_id)).await
}
