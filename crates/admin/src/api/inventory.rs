//! Price and stock operations (`/prices`, `/stock`).

use backoffice_core::{PriceId, StockId};
use reqwest::Method;
use tracing::instrument;

use super::types::{
    NewProductPrice, NewStock, PriceRecord, PriceUpdate, StockRecord, StockUpdate, Validate,
};
use super::{ApiClient, ApiError};

impl ApiClient {
    // =========================================================================
    // Prices
    // =========================================================================

    /// List every price record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_prices(&self) -> Result<Vec<PriceRecord>, ApiError> {
        self.get("prices").await
    }

    /// Get a single price record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(price_id = %id))]
    pub async fn get_price(&self, id: PriceId) -> Result<PriceRecord, ApiError> {
        self.get(&format!("prices/{id}")).await
    }

    /// Create a price record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_price(&self, price: &NewProductPrice) -> Result<(), ApiError> {
        self.create_product_price(price).await
    }

    /// Change the amount of a price record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a negative amount, or error if the
    /// API request fails.
    #[instrument(skip(self), fields(price_id = %id))]
    pub async fn update_price(&self, id: PriceId, update: PriceUpdate) -> Result<(), ApiError> {
        update.validate().map_err(ApiError::Validation)?;
        self.execute(Method::PATCH, &format!("prices/{id}"), Some(&update))
            .await
    }

    /// Delete a price record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(price_id = %id))]
    pub async fn delete_price(&self, id: PriceId) -> Result<(), ApiError> {
        self.delete(&format!("prices/{id}")).await
    }

    // =========================================================================
    // Stock
    // =========================================================================

    /// List every stock record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_stock(&self) -> Result<Vec<StockRecord>, ApiError> {
        self.get("stock").await
    }

    /// Get a single stock record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(stock_id = %id))]
    pub async fn get_stock(&self, id: StockId) -> Result<StockRecord, ApiError> {
        self.get(&format!("stock/{id}")).await
    }

    /// Create a stock record for a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a negative quantity, or error if
    /// the API request fails.
    #[instrument(skip(self), fields(product_id = %stock.product_id))]
    pub async fn create_stock(&self, stock: NewStock) -> Result<(), ApiError> {
        stock.validate().map_err(ApiError::Validation)?;
        self.execute(Method::POST, "stock", Some(&stock)).await
    }

    /// Set the quantity of a stock record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for a negative quantity, or error if
    /// the API request fails.
    #[instrument(skip(self), fields(stock_id = %id))]
    pub async fn update_stock(&self, id: StockId, update: StockUpdate) -> Result<(), ApiError> {
        update.validate().map_err(ApiError::Validation)?;
        self.execute(Method::PATCH, &format!("stock/{id}"), Some(&update))
            .await
    }

    /// Delete a stock record.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(stock_id = %id))]
    pub async fn delete_stock(&self, id: StockId) -> Result<(), ApiError> {
        self.delete(&format!("stock/{id}")).await
    }
}
