//! Order operations (`/orders`).

use backoffice_core::{CustomerId, OrderId, OrderStatus};
use reqwest::Method;
use tracing::instrument;

use super::types::{NewOrder, Order, OrderStats, OrderStatusUpdate, OrdersQuery, Page};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List orders with server-side filtering and paging.
    ///
    /// # Arguments
    ///
    /// * `query` - Page, limit, search text, status and date range; unset
    ///   values are left out of the query string
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not a
    /// `{data, total}` page of valid orders.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, query: &OrdersQuery) -> Result<Page<Order>, ApiError> {
        self.get_with_query("orders", &query.to_pairs()).await
    }

    /// Get a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, or error if the API
    /// request fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get(&format!("orders/{id}")).await
    }

    /// List every order placed by a customer.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(customer_id = %customer_id))]
    pub async fn list_customer_orders(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, ApiError> {
        self.get(&format!("orders/customer/{customer_id}")).await
    }

    /// Place a new order.
    ///
    /// Build the body with [`crate::services::order_draft::OrderDraft`].
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, order), fields(customer_id = %order.order.customer_id, items = order.items.len()))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<(), ApiError> {
        self.execute(Method::POST, "orders", Some(order)).await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let body = OrderStatusUpdate { status };
        self.execute(Method::PATCH, &format!("orders/{id}"), Some(&body))
            .await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.delete(&format!("orders/{id}")).await
    }

    /// Order count and revenue for today and the current month.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn order_stats(&self) -> Result<OrderStats, ApiError> {
        self.get("orders/stats").await
    }
}
