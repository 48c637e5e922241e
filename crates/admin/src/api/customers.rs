//! Customer operations (`/customers`).

use backoffice_core::CustomerId;
use reqwest::Method;
use tracing::instrument;

use super::types::{Customer, CustomerInput, CustomerPatch, DataEnvelope, Validate};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List every customer.
    ///
    /// The endpoint wraps the array in `{ "data": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or `data` is not an array of valid
    /// customers.
    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        let envelope: DataEnvelope<Customer> = self.get("customers").await?;
        Ok(envelope.data)
    }

    /// Get a single customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or error if the API
    /// request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ApiError> {
        self.get(&format!("customers/{id}")).await
    }

    /// Search customers by name, CPF or email (`GET /customers/search?w=`).
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_customers(&self, term: &str) -> Result<Vec<Customer>, ApiError> {
        self.get_with_query("customers/search", &[("w", term)]).await
    }

    /// Create a customer, optionally with a login account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the payload is incomplete, or error
    /// if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn create_customer(&self, input: &CustomerInput) -> Result<(), ApiError> {
        input.validate().map_err(ApiError::Validation)?;
        self.execute(Method::POST, "customers", Some(input)).await
    }

    /// Partially update a customer.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, patch), fields(customer_id = %id))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        patch: &CustomerPatch,
    ) -> Result<(), ApiError> {
        self.execute(Method::PATCH, &format!("customers/{id}"), Some(patch))
            .await
    }

    /// Delete a customer.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(customer_id = %id))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), ApiError> {
        self.delete(&format!("customers/{id}")).await
    }
}
