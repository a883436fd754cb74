//! Menu DTOs: categories and the dishes they group.

use serde::{Deserialize, Serialize};

/// A menu category (starters, pizzas, desserts...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A single dish on the menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

/// Filters for listing dishes. Empty filters list the whole menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishQuery {
    pub category_id: Option<u64>,
    pub search: Option<String>,
}

impl DishQuery {
    /// Query pairs in wire form, skipping unset and blank filters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId".to_string(), category_id.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search".to_string(), search.to_string()));
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_defaults() {
        let dish: Dish = serde_json::from_str(
            r#"{"id":3,"name":"Tiramisu","price":6.0,"categoryId":4}"#,
        )
        .unwrap();
        assert!(dish.available);
        assert!(dish.description.is_empty());
        assert_eq!(dish.image_url, None);
    }

    #[test]
    fn test_dish_query_pairs() {
        let query = DishQuery {
            category_id: Some(2),
            search: Some("  pesto ".to_string()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("categoryId".to_string(), "2".to_string()),
                ("search".to_string(), "pesto".to_string()),
            ]
        );

        let blank = DishQuery {
            category_id: None,
            search: Some("   ".to_string()),
        };
        assert!(blank.to_pairs().is_empty());
    }
}
