//! Category operations (`/categories`).

use backoffice_core::CategoryId;
use tracing::instrument;

use super::types::{Category, CategoryInput, CategoryPatch};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every category as a flat array.
    ///
    /// Feed the result to [`crate::components::category_tree::build`] to get
    /// the indented rendering order.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an array of
    /// valid categories.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("categories").await
    }

    /// List the categories shown in the storefront menu.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_menu_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("categories/menu").await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.post("categories", input).await
    }

    /// Partially update a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, patch), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> Result<Category, ApiError> {
        self.patch(&format!("categories/{id}"), patch).await
    }

    /// Toggle whether a category appears in the storefront menu.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn set_category_show_in_menu(
        &self,
        id: CategoryId,
        show_in_menu: bool,
    ) -> Result<Category, ApiError> {
        let patch = CategoryPatch {
            show_in_menu: Some(show_in_menu),
            ..CategoryPatch::default()
        };
        self.update_category(id, &patch).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("categories/{id}")).await
    }
}
