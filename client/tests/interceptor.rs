//! # Auth Interceptor Tests
//!
//! Envelope unwrapping and the 401 → refresh → retry-once cycle, run against
//! a wiremock backend.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{cart_items, categories, failure, ok, TestClient};
use restaurant_client::events::{event_channel, ClientEvent};
use restaurant_client::services::api::{
    self, ApiClient, MemoryTokenStore, PendingRequest, TokenPair, TokenStore,
};
use restaurant_client::{AppError, AuthError, ClientConfig};
use serde_json::{json, Value};
use shared::{CartItem, Category};
use reqwest::header::{HeaderName, HeaderValue};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn refresh_ok(access_token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(ok(json!({ "accessToken": access_token })))
}

#[tokio::test]
async fn test_success_returns_data_without_envelope() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(categories())))
        .expect(1)
        .mount(&t.server)
        .await;

    let result: Vec<Category> = t.client.get("/categories").await.unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[1].name, "Desserts");
    assert_eq!(result[1].description.as_deref(), Some("Sweet things"));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([]))))
        .expect(1)
        .mount(&t.server)
        .await;

    let result: Vec<Category> = t.client.get("/categories").await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_request_without_token_has_no_authorization_header() {
    let t = TestClient::anonymous().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(categories())))
        .mount(&t.server)
        .await;

    let _: Vec<Category> = t.client.get("/categories").await.unwrap();

    let requests = t.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_unsuccessful_envelope_becomes_api_error() {
    let t = TestClient::signed_in().await;

    Mock::given(method("POST"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(409, "Dish is sold out")))
        .mount(&t.server)
        .await;

    let result: Result<CartItem, _> = t
        .client
        .post("/cart", &json!({ "userId": 42, "dishId": 7, "quantity": 1 }))
        .await;

    match result {
        Err(AppError::Api {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 409);
            assert_eq!(message, "Dish is sold out");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&t.server)
        .await;

    let result: Result<Vec<Category>, _> = t.client.get("/categories").await;
    assert!(matches!(result, Err(AppError::Decode(_))));
}

#[tokio::test]
async fn test_server_error_is_http_error_without_refresh() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .expect(0)
        .mount(&t.server)
        .await;

    let result: Result<Value, _> = t.client.get("/orders").await;

    match result {
        Err(AppError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected HttpError, got {:?}", other),
    }
    assert_eq!(t.tokens.access_token().as_deref(), Some("T1"));
}

#[tokio::test]
async fn test_cart_401_refreshes_and_retries_with_new_token() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(query_param("userId", "42"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({ "refreshToken": "R1" })))
        .respond_with(refresh_ok("T2"))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(query_param("userId", "42"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(cart_items())))
        .expect(1)
        .mount(&t.server)
        .await;

    let cart = api::cart::get_cart(&t.client, 42).await.unwrap();

    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0].id, 1);
    assert_eq!(cart[0].name, "Margherita");
    assert_eq!(t.tokens.access_token().as_deref(), Some("T2"));
    assert_eq!(t.tokens.refresh_token().as_deref(), Some("R1"));
    assert_eq!(t.drain_events(), vec![ClientEvent::TokensRefreshed]);
}

#[tokio::test]
async fn test_rotated_refresh_token_is_stored() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok(json!({ "accessToken": "T2", "refreshToken": "R2" }))),
        )
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "id": 42, "name": "Ada", "email": "ada@example.com"
        }))))
        .mount(&t.server)
        .await;

    let profile = api::user::get_profile(&t.client).await.unwrap();

    assert_eq!(profile.name, "Ada");
    assert_eq!(t.tokens.access_token().as_deref(), Some("T2"));
    assert_eq!(t.tokens.refresh_token().as_deref(), Some("R2"));
}

#[tokio::test]
async fn test_retry_outcome_is_returned_as_is() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/orders/9"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/9"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such order"))
        .expect(1)
        .mount(&t.server)
        .await;

    let result = api::orders::get_order(&t.client, 9).await;

    assert!(matches!(result, Err(AppError::Http { status: 404, .. })));
    assert_eq!(t.tokens.access_token().as_deref(), Some("T2"));
}

#[tokio::test]
async fn test_second_401_expires_session_without_second_refresh() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .expect(1)
        .mount(&t.server)
        .await;

    let result = api::cart::get_cart(&t.client, 42).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::RetryUnauthorized))
    ));
    assert_eq!(t.tokens.access_token(), None);
    assert_eq!(t.tokens.refresh_token(), None);
    assert!(!t.client.is_authenticated());

    let events = t.drain_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], ClientEvent::TokensRefreshed);
    assert!(matches!(events[1], ClientEvent::SessionExpired { .. }));
}

#[tokio::test]
async fn test_rejected_refresh_clears_tokens_and_expires_session() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh token expired"))
        .expect(1)
        .mount(&t.server)
        .await;

    let result = api::cart::get_cart(&t.client, 42).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::RefreshRejected { status: 401 }))
    ));
    assert_eq!(t.tokens.access_token(), None);
    assert_eq!(t.tokens.refresh_token(), None);
    assert!(!t.client.is_authenticated());

    let events = t.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ClientEvent::SessionExpired { .. }));
}

#[tokio::test]
async fn test_unsuccessful_refresh_envelope_is_rejection() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure(403, "Refresh token revoked")))
        .expect(1)
        .mount(&t.server)
        .await;

    let result = api::cart::get_cart(&t.client, 42).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::RefreshRejected { status: 403 }))
    ));
    assert_eq!(t.tokens.access_token(), None);
}

#[tokio::test]
async fn test_unreachable_refresh_clears_tokens() {
    let server = MockServer::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(TokenPair::new("T1", "R1")));
    let (events_tx, events_rx) = event_channel();
    let client = ApiClient::builder(ClientConfig::new(server.uri()))
        .token_store(tokens.clone())
        .events(events_tx)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    // Slower than the client timeout: the refresh never completes
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2").set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let result = api::cart::get_cart(&client, 42).await;

    assert!(matches!(result, Err(AppError::Auth(AuthError::RefreshFailed(_)))));
    assert_eq!(tokens.access_token(), None);
    assert!(matches!(
        events_rx.try_recv(),
        Ok(ClientEvent::SessionExpired { .. })
    ));
}

#[tokio::test]
async fn test_401_without_refresh_token_expires_session() {
    let t = TestClient::anonymous().await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .expect(0)
        .mount(&t.server)
        .await;

    let result = api::user::get_profile(&t.client).await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::MissingRefreshToken))
    ));
    assert_eq!(t.drain_events().len(), 1);
}

#[tokio::test]
async fn test_unauthenticated_request_reports_401_as_http_error() {
    let t = TestClient::signed_in().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .expect(0)
        .mount(&t.server)
        .await;

    let request = PendingRequest::post("/auth/login")
        .unauthenticated()
        .json(&json!({ "email": "ada@example.com", "password": "wrong" }))
        .unwrap();
    let result: Result<Value, _> = t.client.send(request).await;

    assert!(matches!(result, Err(AppError::Http { status: 401, .. })));
    assert_eq!(t.tokens.access_token().as_deref(), Some("T1"));
    assert!(t.drain_events().is_empty());

    let requests = t.server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_concurrent_401s_share_a_single_refresh() {
    let t = TestClient::signed_in().await;

    Mock::given(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2").set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(cart_items())))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(categories())))
        .expect(1)
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(header("authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([]))))
        .expect(1)
        .mount(&t.server)
        .await;

    let (cart, menu, orders) = tokio::join!(
        api::cart::get_cart(&t.client, 42),
        api::categories::get_categories(&t.client),
        api::orders::get_orders(&t.client, 42),
    );

    assert_eq!(cart.unwrap().len(), 2);
    assert_eq!(menu.unwrap().len(), 2);
    assert!(orders.unwrap().is_empty());
    assert_eq!(t.tokens.access_token().as_deref(), Some("T2"));
    assert_eq!(t.drain_events(), vec![ClientEvent::TokensRefreshed]);
}

#[tokio::test]
async fn test_concurrent_401s_share_a_failed_refresh() {
    let t = TestClient::signed_in().await;

    Mock::given(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(403).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&t.server)
        .await;

    let (cart, menu) = tokio::join!(
        api::cart::get_cart(&t.client, 42),
        api::categories::get_categories(&t.client),
    );

    for result in [cart.map(|_| ()), menu.map(|_| ())] {
        assert!(matches!(
            result,
            Err(AppError::Auth(AuthError::RefreshRejected { status: 403 }))
        ));
    }
    assert_eq!(t.tokens.access_token(), None);

    let events = t.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ClientEvent::SessionExpired { .. }));
}

#[tokio::test]
async fn test_refresh_server_error_is_failure_not_rejection() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&t.server)
        .await;

    let result = api::cart::get_cart(&t.client, 42).await;

    match result {
        Err(AppError::Auth(AuthError::RefreshFailed(reason))) => {
            assert!(reason.contains("502"));
        }
        other => panic!("expected RefreshFailed, got {:?}", other),
    }
    assert_eq!(t.tokens.access_token(), None);

    let events = t.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], ClientEvent::SessionExpired { .. }));
}

#[tokio::test]
async fn test_request_dropped_mid_refresh_leaves_session_untouched() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2").set_delay(Duration::from_secs(2)))
        .mount(&t.server)
        .await;

    let outcome = tokio::time::timeout(
        Duration::from_millis(100),
        api::cart::get_cart(&t.client, 42),
    )
    .await;

    assert!(outcome.is_err());
    assert_eq!(t.tokens.access_token().as_deref(), Some("T1"));
    assert_eq!(t.tokens.refresh_token().as_deref(), Some("R1"));
    assert!(t.drain_events().is_empty());
}

#[tokio::test]
async fn test_caller_headers_survive_the_retry() {
    let t = TestClient::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/orders/3"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&t.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(refresh_ok("T2"))
        .mount(&t.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/3"))
        .and(header("authorization", "Bearer T2"))
        .and(header("x-client-version", "2.1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({ "id": 3 }))))
        .expect(1)
        .mount(&t.server)
        .await;

    let request = PendingRequest::get("/orders/3").header(
        HeaderName::from_static("x-client-version"),
        HeaderValue::from_static("2.1.0"),
    );
    let order: Value = t.client.send(request).await.unwrap();

    assert_eq!(order["id"], 3);
    let requests = t.server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("x-client-version").unwrap(), "2.1.0");
}
