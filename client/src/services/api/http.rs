//! # HTTP Client Core
//!
//! A `reqwest::Client` preconfigured with the API base endpoint, the fixed
//! 15 second timeout and JSON default headers.
//!
//! The core knows nothing about tokens or envelopes: [`HttpClient::execute`]
//! performs exactly one network call and hands back whatever status the server
//! answered with. Auth handling lives one layer up in
//! [`ApiClient`](super::client::ApiClient).

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};

/// Description of an outgoing request.
///
/// Kept around after the first send so the interceptor can replay it once
/// after a token refresh.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub method: Method,
    /// Path relative to the base endpoint (e.g. `/cart`).
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub(crate) retried: bool,
    pub(crate) authenticated: bool,
}

impl PendingRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            retried: false,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append several query parameters.
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set the JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`AppError::Validation`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| AppError::Validation(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Add a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Mark the request as sent without credentials (login, registration).
    ///
    /// No bearer token is attached and a 401 is reported as
    /// [`AppError::Http`] instead of triggering a token refresh.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// Response as received from the network.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turn a non-2xx response into [`AppError::Http`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::Http {
                status: self.status.as_u16(),
                body: self.body,
            })
        }
    }
}

/// HTTP client with a stable base configuration.
///
/// Connection pooling comes from the wrapped `reqwest::Client`; cloning an
/// `HttpClient` shares the pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Build the client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the configuration is invalid or the
    /// underlying client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Base endpoint all paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send `request` once and return the response whatever its status.
    ///
    /// # Errors
    ///
    /// Only [`AppError::Network`]: connection refused, DNS failure, timeout,
    /// or a body that could not be read.
    pub async fn execute(&self, request: &PendingRequest) -> Result<RawResponse> {
        let url = self.url_for(&request.path);
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(
                method = %request.method,
                url = %url,
                error = %e,
                timeout = e.is_timeout(),
                "Network error"
            );
            AppError::Network(e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        tracing::debug!(
            method = %request.method,
            url = %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "HTTP request completed"
        );

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// `GET path`, failing with [`AppError::Http`] on non-2xx.
    pub async fn get(&self, path: &str, headers: Option<HeaderMap>) -> Result<RawResponse> {
        self.send_checked(Method::GET, path, None, headers).await
    }

    /// `POST path`, failing with [`AppError::Http`] on non-2xx.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<RawResponse> {
        self.send_checked(Method::POST, path, body, headers).await
    }

    /// `PUT path`, failing with [`AppError::Http`] on non-2xx.
    pub async fn put(
        &self,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<RawResponse> {
        self.send_checked(Method::PUT, path, body, headers).await
    }

    /// `DELETE path`, failing with [`AppError::Http`] on non-2xx.
    pub async fn delete(&self, path: &str, headers: Option<HeaderMap>) -> Result<RawResponse> {
        self.send_checked(Method::DELETE, path, None, headers).await
    }

    async fn send_checked(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<RawResponse> {
        let mut request = PendingRequest::new(method, path);
        request.body = body;
        if let Some(headers) = headers {
            request.headers = headers;
        }
        self.execute(&request).await?.error_for_status()
    }
}
