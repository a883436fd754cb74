//! # Response Envelope
//!
//! Every successful backend response is wrapped as
//! `{ "success": bool, "statusCode": int, "data": T }`. Failed operations that
//! still return a 2xx status set `success` to `false` and usually carry a
//! `message`.

use serde::{Deserialize, Serialize};

/// Fallback text when a failed envelope carries no message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request was not successful";

/// The wire wrapper shared by all API responses.
///
/// `data` is optional at the type level so that failed envelopes (which
/// usually omit it) still parse. When `success` is `true` the backend
/// guarantees `data` is present for endpoints that return a payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Successful envelope wrapping `data`.
    pub fn ok(status_code: u16, data: T) -> Self {
        Self {
            success: true,
            status_code,
            data: Some(data),
            message: None,
        }
    }

    /// Failed envelope with an explanatory message.
    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Message to surface for a failed envelope.
    pub fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
    }
}
