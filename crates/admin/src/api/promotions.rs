//! Promotion operations (`/promotions`).

use backoffice_core::PromotionId;
use tracing::instrument;

use super::types::{Promotion, PromotionInput, PromotionPatch, Validate};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every promotion.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_promotions(&self) -> Result<Vec<Promotion>, ApiError> {
        self.get("promotions").await
    }

    /// Get a single promotion by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(promotion_id = %id))]
    pub async fn get_promotion(&self, id: PromotionId) -> Result<Promotion, ApiError> {
        self.get(&format!("promotions/{id}")).await
    }

    /// Create a promotion.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for an inverted date window or a
    /// negative price, or error if the API request fails.
    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn create_promotion(&self, input: &PromotionInput) -> Result<Promotion, ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        self.post("promotions", input).await
    }

    /// Partially update a promotion.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, patch), fields(promotion_id = %id))]
    pub async fn update_promotion(
        &self,
        id: PromotionId,
        patch: &PromotionPatch,
    ) -> Result<Promotion, ApiError> {
        self.patch(&format!("promotions/{id}"), patch).await
    }

    /// Delete a promotion.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(promotion_id = %id))]
    pub async fn delete_promotion(&self, id: PromotionId) -> Result<(), ApiError> {
        self.delete(&format!("promotions/{id}")).await
    }
}
