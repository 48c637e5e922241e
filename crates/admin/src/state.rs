//! State shared by the admin screens.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::components::data_table::{
    DataTableConfig, customers_table_config, orders_table_config, products_table_config,
};
use crate::components::{OrderGrid, ProductGrid};
use crate::config::AdminConfig;
use crate::services::DebouncedSearch;

/// Configuration plus the shared API client and search boxes.
///
/// Cheap to clone.
#[derive(Clone, Debug)]
pub struct AdminState {
    inner: Arc<AdminStateInner>,
}

#[derive(Debug)]
struct AdminStateInner {
    config: AdminConfig,
    api: ApiClient,
    product_search: DebouncedSearch,
    customer_search: DebouncedSearch,
}

impl AdminState {
    /// Build the state from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api)?;
        Ok(Self {
            inner: Arc::new(AdminStateInner {
                product_search: DebouncedSearch::new(config.search_debounce),
                customer_search: DebouncedSearch::new(config.search_debounce),
                config,
                api,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Search box of the product picker.
    #[must_use]
    pub fn product_search(&self) -> &DebouncedSearch {
        &self.inner.product_search
    }

    /// Search box of the customer picker.
    #[must_use]
    pub fn customer_search(&self) -> &DebouncedSearch {
        &self.inner.customer_search
    }

    /// Fresh products grid with the configured page size.
    #[must_use]
    pub fn product_grid(&self) -> ProductGrid {
        ProductGrid::products(self.inner.config.grid.products_page_size)
    }

    /// Fresh orders grid with the configured page size.
    #[must_use]
    pub fn order_grid(&self) -> OrderGrid {
        OrderGrid::orders(self.inner.config.grid.orders_page_size)
    }

    #[must_use]
    pub fn products_table(&self) -> DataTableConfig {
        products_table_config(self.inner.config.grid.products_page_size)
    }

    #[must_use]
    pub fn orders_table(&self) -> DataTableConfig {
        orders_table_config(self.inner.config.grid.orders_page_size)
    }

    #[must_use]
    pub fn customers_table(&self) -> DataTableConfig {
        customers_table_config(self.inner.config.grid.customers_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_tables_use_their_own_page_sizes() {
        let mut config = AdminConfig::for_api_url("http://localhost:3002")
            .unwrap_or_else(|e| panic!("{e}"));
        config.grid = GridConfig {
            products_page_size: 30,
            orders_page_size: 10,
            customers_page_size: 15,
        };
        let state = AdminState::new(config).unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(state.products_table().page_size, 30);
        assert_eq!(state.orders_table().page_size, 10);
        assert_eq!(state.customers_table().page_size, 15);
    }
}
