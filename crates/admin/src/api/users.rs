//! User account operations (`/users`).

use backoffice_core::UserId;
use reqwest::Method;
use tracing::instrument;

use super::types::{User, UserInput, UserPatch, Validate};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every user account.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("users").await
    }

    /// Get a single user by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: UserId) -> Result<User, ApiError> {
        self.get(&format!("users/{id}")).await
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a short password, or error if the
    /// API request fails.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: &UserInput) -> Result<(), ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        self.execute(Method::POST, "users", Some(input)).await
    }

    /// Partially update a user account.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, patch), fields(user_id = %id))]
    pub async fn update_user(&self, id: UserId, patch: &UserPatch) -> Result<(), ApiError> {
        self.execute(Method::PATCH, &format!("users/{id}"), Some(patch))
            .await
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        self.delete(&format!("users/{id}")).await
    }
}
