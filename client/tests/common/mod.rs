//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use restaurant_client::config::ClientConfig;
use restaurant_client::events::{event_channel, ClientEvent, EventReceiver};
use restaurant_client::services::api::{ApiClient, MemoryTokenStore, TokenPair};
use serde_json::{json, Value};
use wiremock::MockServer;

/// A client wired to a mock backend, with handles on its token store and events.
pub struct TestClient {
    pub server: MockServer,
    pub client: ApiClient,
    pub tokens: Arc<MemoryTokenStore>,
    pub events: EventReceiver,
}

impl TestClient {
    /// Client already holding access token `T1` and refresh token `R1`.
    pub async fn signed_in() -> Self {
        Self::with_store(MemoryTokenStore::with_tokens(TokenPair::new("T1", "R1"))).await
    }

    /// Client with an empty token store.
    pub async fn anonymous() -> Self {
        Self::with_store(MemoryTokenStore::new()).await
    }

    async fn with_store(store: MemoryTokenStore) -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(store);
        let (events_tx, events) = event_channel();
        let client = ApiClient::builder(ClientConfig::new(server.uri()))
            .token_store(tokens.clone())
            .events(events_tx)
            .build()
            .expect("client should build against mock server");

        Self {
            server,
            client,
            tokens,
            events,
        }
    }

    /// Events emitted so far.
    pub fn drain_events(&self) -> Vec<ClientEvent> {
        std::iter::from_fn(|| self.events.try_recv().ok()).collect()
    }
}

/// `{ success: true, statusCode: 200, data }`
pub fn ok(data: Value) -> Value {
    json!({ "success": true, "statusCode": 200, "data": data })
}

/// `{ success: false, statusCode, message }`
pub fn failure(status_code: u16, message: &str) -> Value {
    json!({ "success": false, "statusCode": status_code, "message": message })
}

pub fn cart_items() -> Value {
    json!([
        { "id": 1, "dishId": 7, "name": "Margherita", "quantity": 2, "price": 9.5 },
        { "id": 2, "dishId": 9, "name": "Tiramisu", "quantity": 1, "price": 6.0 }
    ])
}

pub fn categories() -> Value {
    json!([
        { "id": 1, "name": "Pizza" },
        { "id": 2, "name": "Desserts", "description": "Sweet things" }
    ])
}

pub fn order(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "userId": 42,
        "items": [{ "dishId": 7, "name": "Margherita", "quantity": 2, "price": 9.5 }],
        "total": 19.0,
        "status": status,
        "createdAt": "2024-05-01T12:30:00Z"
    })
}
