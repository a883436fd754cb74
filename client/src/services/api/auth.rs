//! # Authentication Endpoints
//!
//! Login, registration and logout. These are the only wrappers that write to
//! the token store directly; refreshing is handled by the interceptor.

use lib_utils::{validate_email, validate_min_length, validate_not_empty};
use shared::{AuthSession, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use super::http::PendingRequest;
use super::token_store::TokenPair;
use crate::core::error::{AppError, Result};
use crate::events::ClientEvent;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Login with email and password and store the returned token pair.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<AuthSession> {
    validate_email(&email).map_err(AppError::Validation)?;
    validate_not_empty(&password, "Password").map_err(AppError::Validation)?;

    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = PendingRequest::post(LOGIN_PATH)
        .unauthenticated()
        .json(&LoginRequest { email, password })?;

    let session: AuthSession = client.send(request).await.map_err(|e| {
        tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis() as u64, "Login failed");
        e
    })?;

    store_session(client, &session);
    tracing::info!(
        user_id = session.user.id,
        duration_ms = start.elapsed().as_millis() as u64,
        "Login successful"
    );
    Ok(session)
}

/// Register a new account. The backend signs the user in immediately.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthSession> {
    validate_not_empty(&request.name, "Name").map_err(AppError::Validation)?;
    validate_email(&request.email).map_err(AppError::Validation)?;
    validate_min_length(&request.password, MIN_PASSWORD_LENGTH, "Password")
        .map_err(AppError::Validation)?;

    let request = PendingRequest::post(REGISTER_PATH)
        .unauthenticated()
        .json(&request)?;
    let session: AuthSession = client.send(request).await?;

    store_session(client, &session);
    tracing::info!(user_id = session.user.id, "Registration successful");
    Ok(session)
}

/// Invalidate the server-side session and forget local tokens.
///
/// Local tokens are cleared even when the server call fails, so the user is
/// always signed out locally; the server error is still returned.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    let result = if client.is_authenticated() {
        client.send::<()>(PendingRequest::post(LOGOUT_PATH)).await
    } else {
        Ok(())
    };

    client.tokens().clear();
    client.emit(ClientEvent::LoggedOut);

    match &result {
        Ok(()) => tracing::info!("Logged out"),
        Err(e) => tracing::warn!(error = %e, "Server logout failed; local session cleared anyway"),
    }
    result
}

fn store_session(client: &ApiClient, session: &AuthSession) {
    client.tokens().set_tokens(TokenPair::new(
        session.access_token.clone(),
        session.refresh_token.clone(),
    ));
    client.emit(ClientEvent::LoggedIn {
        user_id: session.user.id,
    });
}
