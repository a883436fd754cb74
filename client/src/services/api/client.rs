//! # API Client
//!
//! The auth interceptor wrapped around the [`HttpClient`] core.
//!
//! ## Request phase
//!
//! Before every send the current access token is read from the
//! [`TokenStore`] and attached as `Authorization: Bearer <token>`. Without a
//! token the request goes out unmodified.
//!
//! ## Response phase
//!
//! ```text
//! SENT ─┬─ 2xx ──────────────► unwrap envelope ─► data | ApiError | DecodeError
//!       ├─ 401, not retried ─► REFRESHING ─┬─ ok ───► RETRIED (resend once) ─► SENT
//!       │                                  └─ fail ─► clear tokens, SessionExpired, AuthError
//!       ├─ 401, retried ─────► clear tokens, SessionExpired, AuthError (no second refresh)
//!       └─ other ────────────► HttpError
//! ```

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{RefreshRequest, RefreshedTokens};
use tracing::Instrument;

use super::http::{HttpClient, PendingRequest};
use super::refresh::RefreshCoordinator;
use super::response::decode_envelope;
use super::token_store::{MemoryTokenStore, TokenStore};
use crate::config::ClientConfig;
use crate::core::error::{AppError, AuthError, Result};
use crate::events::{ClientEvent, EventSender};

/// Path of the token refresh endpoint.
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Builder for an [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    tokens: Option<Arc<dyn TokenStore>>,
    events: Option<EventSender>,
}

impl ApiClientBuilder {
    /// Use `tokens` instead of a fresh [`MemoryTokenStore`].
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Publish session events on `events`.
    pub fn events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    /// Override the request timeout (tests only need this; production keeps
    /// the fixed default).
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the configuration is invalid.
    pub fn build(self) -> Result<ApiClient> {
        let http = HttpClient::new(&self.config)?;
        let tokens = self
            .tokens
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));

        Ok(ApiClient {
            http,
            tokens,
            refresh: RefreshCoordinator::new(),
            events: self.events,
        })
    }
}

/// HTTP client for the restaurant backend with transparent token refresh.
///
/// Share one instance (behind an `Arc`) across the application so that
/// concurrent 401s coalesce into a single refresh.
pub struct ApiClient {
    http: HttpClient,
    tokens: Arc<dyn TokenStore>,
    refresh: RefreshCoordinator,
    events: Option<EventSender>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.http.base_url())
            .field("authenticated", &self.is_authenticated())
            .field("refresh_epoch", &self.refresh.epoch())
            .finish()
    }
}

impl ApiClient {
    /// Builder for a client talking to `config.api_url`.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            tokens: None,
            events: None,
        }
    }

    /// Client with an in-memory token store and no event channel.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// The underlying HTTP core (no auth handling).
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The token store this client reads and writes.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Whether an access token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    /// Publish `event` if a channel is attached. Never blocks.
    pub(crate) fn emit(&self, event: ClientEvent) {
        if let Some(events) = &self.events {
            if events.try_send(event).is_err() {
                tracing::debug!("Event channel closed; dropping client event");
            }
        }
    }

    /// `GET path` through the interceptor.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(PendingRequest::get(path)).await
    }

    /// `POST path` with a JSON body through the interceptor.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(PendingRequest::post(path).json(body)?).await
    }

    /// `PUT path` with a JSON body through the interceptor.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(PendingRequest::put(path).json(body)?).await
    }

    /// `DELETE path` through the interceptor.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(PendingRequest::delete(path)).await
    }

    /// Send `request` through both interceptor phases and return the
    /// unwrapped envelope data.
    ///
    /// # Errors
    ///
    /// - [`AppError::Network`] / [`AppError::Http`] unchanged from the core
    /// - [`AppError::Api`] when the envelope reports failure
    /// - [`AppError::Auth`] when the refresh failed or the retry was still 401
    /// - [`AppError::Decode`] when the body does not match `T`
    pub async fn send<T: DeserializeOwned>(&self, request: PendingRequest) -> Result<T> {
        let span = tracing::info_span!(
            "api_request",
            request_id = %uuid::Uuid::new_v4(),
            method = %request.method,
            path = %request.path,
        );
        self.send_inner(request).instrument(span).await
    }

    async fn send_inner<T: DeserializeOwned>(&self, mut request: PendingRequest) -> Result<T> {
        loop {
            // Epoch before token: a refresh landing in between is then seen
            // as "completed after send" and reused rather than repeated.
            let epoch = self.refresh.epoch();
            self.authorize(&mut request)?;

            let response = self.http.execute(&request).await?;

            if response.status == StatusCode::UNAUTHORIZED && request.authenticated {
                if request.retried {
                    tracing::warn!("Request still unauthorized after token refresh, clearing session");
                    let err = AuthError::RetryUnauthorized;
                    self.expire_session(&err);
                    return Err(err.into());
                }

                tracing::info!("Access token rejected, refreshing");
                self.refresh
                    .refresh_after(epoch, || self.refresh_session())
                    .await?;
                request.retried = true;
                continue;
            }

            let response = response.error_for_status().map_err(|e| {
                if let AppError::Http { status, .. } = &e {
                    tracing::warn!(status = *status, "Request failed");
                }
                e
            })?;

            return decode_envelope(&response);
        }
    }

    /// Request phase: attach the bearer token when one is stored.
    fn authorize(&self, request: &mut PendingRequest) -> Result<()> {
        request.headers.remove(AUTHORIZATION);
        if !request.authenticated {
            return Ok(());
        }

        if let Some(token) = self.tokens.access_token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                AppError::Validation("Stored access token is not a valid header value".to_string())
            })?;
            request.headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }

    /// One refresh attempt, run under the coordinator's lock.
    async fn refresh_session(&self) -> std::result::Result<(), AuthError> {
        match self.request_new_tokens().await {
            Ok(tokens) => {
                if !self
                    .tokens
                    .update_access_token(tokens.access_token, tokens.refresh_token)
                {
                    // Logged out while the refresh was in flight
                    tracing::info!("Session ended during token refresh");
                    return Err(AuthError::RefreshFailed(
                        "session ended during refresh".to_string(),
                    ));
                }
                tracing::info!("Access token refreshed");
                self.emit(ClientEvent::TokensRefreshed);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Token refresh failed, clearing session");
                self.expire_session(&err);
                Err(err)
            }
        }
    }

    /// Reset to unauthenticated and tell the UI to send the user home.
    fn expire_session(&self, err: &AuthError) {
        self.tokens.clear();
        self.emit(ClientEvent::SessionExpired {
            reason: err.to_string(),
        });
    }

    /// Call the refresh endpoint directly on the core, bypassing the
    /// interceptor so a rejected refresh cannot recurse.
    async fn request_new_tokens(&self) -> std::result::Result<RefreshedTokens, AuthError> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingRefreshToken)?;

        let request = PendingRequest::post(REFRESH_PATH)
            .unauthenticated()
            .json(&RefreshRequest { refresh_token })
            .map_err(|e| AuthError::RefreshFailed(e.to_string()))?;

        let response = self
            .http
            .execute(&request)
            .await
            .map_err(|e| AuthError::RefreshFailed(e.to_string()))?;

        if !response.is_success() {
            let status = response.status.as_u16();
            return Err(match status {
                401 | 403 => AuthError::RefreshRejected { status },
                _ => AuthError::RefreshFailed(format!("refresh endpoint answered HTTP {}", status)),
            });
        }

        decode_envelope::<RefreshedTokens>(&response).map_err(|e| match e {
            AppError::Api { status_code, .. } if status_code == 401 || status_code == 403 => {
                AuthError::RefreshRejected {
                    status: status_code,
                }
            }
            other => AuthError::RefreshFailed(other.to_string()),
        })
    }
}
