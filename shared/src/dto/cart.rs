use serde::{Deserialize, Serialize};

/// One line in a user's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: u64,
    pub dish_id: u64,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl CartItem {
    /// Price of the line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Body of `POST /cart`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: u64,
    pub dish_id: u64,
    pub quantity: u32,
}

/// Body of `PUT /cart/{itemId}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}

/// Sum of all line totals.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}
