//! # User Endpoints

use lib_utils::{validate_min_length, validate_not_empty};
use shared::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};

use super::auth::MIN_PASSWORD_LENGTH;
use super::client::ApiClient;
use crate::core::error::{AppError, Result};

/// Profile of the signed-in user.
#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &ApiClient) -> Result<UserProfile> {
    client.get("/user/profile").await
}

/// Update profile fields. Unset fields are left unchanged server-side.
#[tracing::instrument(skip(client, update))]
pub async fn update_profile(client: &ApiClient, update: &UpdateProfileRequest) -> Result<UserProfile> {
    if update.is_empty() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    if let Some(name) = &update.name {
        validate_not_empty(name, "Name").map_err(AppError::Validation)?;
    }
    client.put("/user/profile", update).await
}

#[tracing::instrument(skip(client, current_password, new_password))]
pub async fn change_password(
    client: &ApiClient,
    current_password: String,
    new_password: String,
) -> Result<()> {
    validate_not_empty(&current_password, "Current password").map_err(AppError::Validation)?;
    validate_min_length(&new_password, MIN_PASSWORD_LENGTH, "New password")
        .map_err(AppError::Validation)?;

    let request = ChangePasswordRequest {
        current_password,
        new_password,
    };
    client.put("/user/password", &request).await
}
