//! # Envelope Unwrapping
//!
//! Converts a 2xx [`RawResponse`] into the payload the caller asked for.
//! Callers never see the [`ApiEnvelope`] wrapper itself.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::ApiEnvelope;

use super::http::RawResponse;
use crate::core::error::{AppError, Result};

/// Unwrap `{ success, statusCode, data }` into `T`.
///
/// - `success: true` → `data` decoded as `T`. A missing or `null` `data` is
///   decoded from JSON `null`, so unit-returning endpoints work and anything
///   else fails as [`AppError::Decode`].
/// - `success: false` → [`AppError::Api`] with the envelope's status code and
///   message.
/// - Not an envelope at all → [`AppError::Decode`].
pub fn decode_envelope<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    let envelope: ApiEnvelope<Value> = serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(status = response.status.as_u16(), error = %e, "Response is not an API envelope");
        AppError::Decode(format!("Invalid response envelope: {}", e))
    })?;

    if !envelope.success {
        let message = envelope.failure_message();
        tracing::warn!(
            status_code = envelope.status_code,
            message = %message,
            "API reported failure"
        );
        return Err(AppError::Api {
            status_code: envelope.status_code,
            message,
        });
    }

    let data = envelope.data.unwrap_or(Value::Null);
    serde_json::from_value(data)
        .map_err(|e| AppError::Decode(format!("Unexpected response data: {}", e)))
}
