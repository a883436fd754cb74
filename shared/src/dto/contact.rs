use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /contact`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Acknowledgement of a contact message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: u64,
    pub received_at: DateTime<Utc>,
}
