//! # Contact Endpoint

use lib_utils::{validate_email, validate_not_empty};
use shared::{ContactMessage, ContactReceipt};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Send the contact form. Works signed in or anonymous.
#[tracing::instrument(skip(client, message), fields(email = %message.email))]
pub async fn send_contact_message(client: &ApiClient, message: &ContactMessage) -> Result<ContactReceipt> {
    validate_not_empty(&message.name, "Name").map_err(AppError::Validation)?;
    validate_email(&message.email).map_err(AppError::Validation)?;
    validate_not_empty(&message.message, "Message").map_err(AppError::Validation)?;

    client.post("/contact", message).await
}
