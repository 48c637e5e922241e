//! Product operations (`/products`, `/products/images`, `/prices`).

use backoffice_core::ProductId;
use reqwest::Method;
use tracing::instrument;

use super::types::{
    Created, NewProductImage, NewProductPrice, Product, ProductInput, ProductPatch, Validate,
};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every product.
    ///
    /// The whole catalogue is fetched at once; paging happens client side in
    /// the grid.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an array of
    /// valid products.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("products").await
    }

    /// Search products by free text (`GET /products/search?w=`).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_products(&self, term: &str) -> Result<Vec<Product>, ApiError> {
        self.get_with_query("products/search", &[("w", term)]).await
    }

    /// Create a product and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the payload is incomplete, or error
    /// if the API request fails.
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<ProductId, ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        let created: Created<ProductId> = self.post("products", input).await?;
        Ok(created.id)
    }

    /// Partially update a product.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update_product(&self, id: ProductId, patch: &ProductPatch) -> Result<(), ApiError> {
        self.execute(Method::PATCH, &format!("products/{id}"), Some(patch))
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("products/{id}")).await
    }

    /// Attach an image to a product.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, image), fields(product_id = %image.product_id, is_main = image.is_main))]
    pub async fn create_product_image(&self, image: &NewProductImage) -> Result<(), ApiError> {
        self.execute(Method::POST, "products/images", Some(image))
            .await
    }

    /// Record a price for a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a negative price, or error if the
    /// API request fails.
    #[instrument(skip(self, price), fields(product_id = %price.product_id))]
    pub async fn create_product_price(&self, price: &NewProductPrice) -> Result<(), ApiError> {
        price.validate().map_err(ApiError::Validation)?;
        self.execute(Method::POST, "prices", Some(price)).await
    }
}
