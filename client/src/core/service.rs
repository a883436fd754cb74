//! # Service Traits
//!
//! Traits for dependency injection, so UI code can depend on
//! `Arc<dyn ApiService>` and tests can swap in a mock.

use async_trait::async_trait;
use shared::{
    AuthSession, CartItem, Category, ContactMessage, ContactReceipt, CreateOrderRequest, Dish,
    DishQuery, Order, PaymentConfirmation, PaymentIntent, PromoValidation, RegisterRequest,
    UpdateProfileRequest, UserProfile,
};

use crate::core::error::Result;
use crate::services::api::{self, ApiClient};

/// Trait for API service operations
#[async_trait]
pub trait ApiService: Send + Sync {
    // --- Auth
    async fn login(&self, email: String, password: String) -> Result<AuthSession>;
    async fn register(&self, request: RegisterRequest) -> Result<AuthSession>;
    async fn logout(&self) -> Result<()>;

    // --- Menu
    async fn get_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, category_id: u64) -> Result<Category>;
    async fn get_dishes(&self, query: DishQuery) -> Result<Vec<Dish>>;
    async fn get_dish(&self, dish_id: u64) -> Result<Dish>;

    // --- Cart
    async fn get_cart(&self, user_id: u64) -> Result<Vec<CartItem>>;
    async fn add_to_cart(&self, user_id: u64, dish_id: u64, quantity: u32) -> Result<CartItem>;
    async fn update_cart_item(&self, item_id: u64, quantity: u32) -> Result<CartItem>;
    async fn remove_from_cart(&self, item_id: u64) -> Result<()>;
    async fn clear_cart(&self, user_id: u64) -> Result<()>;

    // --- User
    async fn get_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, update: UpdateProfileRequest) -> Result<UserProfile>;
    async fn change_password(&self, current_password: String, new_password: String) -> Result<()>;

    // --- Payment & promo
    async fn create_payment_intent(&self, order_id: u64, amount: f64, currency: String) -> Result<PaymentIntent>;
    async fn confirm_payment(&self, payment_intent_id: String, order_id: u64) -> Result<PaymentConfirmation>;
    async fn validate_promo(&self, code: String, order_total: f64) -> Result<PromoValidation>;

    // --- Contact
    async fn send_contact_message(&self, message: ContactMessage) -> Result<ContactReceipt>;

    // --- Orders
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order>;
    async fn get_orders(&self, user_id: u64) -> Result<Vec<Order>>;
    async fn get_order(&self, order_id: u64) -> Result<Order>;
    async fn cancel_order(&self, order_id: u64) -> Result<Order>;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<AuthSession> {
        api::auth::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthSession> {
        api::auth::register(self, request).await
    }

    async fn logout(&self) -> Result<()> {
        api::auth::logout(self).await
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        api::categories::get_categories(self).await
    }

    async fn get_category(&self, category_id: u64) -> Result<Category> {
        api::categories::get_category(self, category_id).await
    }

    async fn get_dishes(&self, query: DishQuery) -> Result<Vec<Dish>> {
        api::dishes::get_dishes(self, &query).await
    }

    async fn get_dish(&self, dish_id: u64) -> Result<Dish> {
        api::dishes::get_dish(self, dish_id).await
    }

    async fn get_cart(&self, user_id: u64) -> Result<Vec<CartItem>> {
        api::cart::get_cart(self, user_id).await
    }

    async fn add_to_cart(&self, user_id: u64, dish_id: u64, quantity: u32) -> Result<CartItem> {
        api::cart::add_to_cart(self, user_id, dish_id, quantity).await
    }

    async fn update_cart_item(&self, item_id: u64, quantity: u32) -> Result<CartItem> {
        api::cart::update_cart_item(self, item_id, quantity).await
    }

    async fn remove_from_cart(&self, item_id: u64) -> Result<()> {
        api::cart::remove_from_cart(self, item_id).await
    }

    async fn clear_cart(&self, user_id: u64) -> Result<()> {
        api::cart::clear_cart(self, user_id).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        api::user::get_profile(self).await
    }

    async fn update_profile(&self, update: UpdateProfileRequest) -> Result<UserProfile> {
        api::user::update_profile(self, &update).await
    }

    async fn change_password(&self, current_password: String, new_password: String) -> Result<()> {
        api::user::change_password(self, current_password, new_password).await
    }

    async fn create_payment_intent(&self, order_id: u64, amount: f64, currency: String) -> Result<PaymentIntent> {
        api::payment::create_payment_intent(self, order_id, amount, &currency).await
    }

    async fn confirm_payment(&self, payment_intent_id: String, order_id: u64) -> Result<PaymentConfirmation> {
        api::payment::confirm_payment(self, &payment_intent_id, order_id).await
    }

    async fn validate_promo(&self, code: String, order_total: f64) -> Result<PromoValidation> {
        api::promo::validate_promo(self, &code, order_total).await
    }

    async fn send_contact_message(&self, message: ContactMessage) -> Result<ContactReceipt> {
        api::contact::send_contact_message(self, &message).await
    }

    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order> {
        api::orders::create_order(self, &request).await
    }

    async fn get_orders(&self, user_id: u64) -> Result<Vec<Order>> {
        api::orders::get_orders(self, user_id).await
    }

    async fn get_order(&self, order_id: u64) -> Result<Order> {
        api::orders::get_order(self, order_id).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Order> {
        api::orders::cancel_order(self, order_id).await
    }
}
