//! Data table configuration.
//!
//! Declares the columns, filters and bulk actions of the admin tables. The
//! sortable column keys of the products and orders tables are the grid sort
//! keys, so a header click can be turned into a [`GridAction::SortBy`].
//! Rows render through [`TableCells`], one cell per column key.
//!
//! [`GridAction::SortBy`]: super::grid::GridAction::SortBy

use backoffice_core::{OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

use super::grid::{OrderSortKey, ProductSortKey};
use crate::api::types::{Customer, Order, Product};
use crate::services::bulk::{CustomerBulkAction, OrderBulkAction, ProductBulkAction};

/// A row that can be shown in a data table.
pub trait TableCells {
    /// Text of the cell under column `key`; `None` for unknown keys.
    fn cell(&self, key: &str) -> Option<String>;
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    /// Header text.
    pub label: String,
    pub sortable: bool,
    /// Shown before the user picks columns.
    pub default_visible: bool,
}

impl TableColumn {
    /// A plain column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            default_visible: true,
        }
    }

    /// A column whose header click sorts the grid.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            sortable: true,
            ..Self::new(key, label)
        }
    }

    /// Hide the column until the user enables it.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }
}

/// Kind of filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Select,
    DateRange,
}

/// A choice in a select filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A filter shown above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilter {
    /// Query parameter the filter sets.
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    /// Single-choice filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::Select,
            options,
        }
    }

    /// Start/end date pair.
    #[must_use]
    pub fn date_range(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::DateRange,
            options: Vec::new(),
        }
    }
}

/// Action applied to every selected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    pub key: String,
    pub label: String,
    /// Asks for confirmation before running.
    pub destructive: bool,
}

impl BulkAction {
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            destructive: false,
        }
    }

    #[must_use]
    pub const fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Full description of one admin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableConfig {
    pub table_id: String,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub bulk_actions: Vec<BulkAction>,
    pub search_placeholder: String,
    /// Message shown when nothing matches.
    pub empty_message: String,
    pub page_size: usize,
}

impl DataTableConfig {
    #[must_use]
    pub fn new(table_id: &str, page_size: usize) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: Vec::new(),
            filters: Vec::new(),
            bulk_actions: Vec::new(),
            search_placeholder: "Search...".to_string(),
            empty_message: "Nothing found".to_string(),
            page_size,
        }
    }

    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn bulk_actions(mut self, actions: impl IntoIterator<Item = BulkAction>) -> Self {
        self.bulk_actions.extend(actions);
        self
    }

    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    #[must_use]
    pub fn empty_message(mut self, message: &str) -> Self {
        self.empty_message = message.to_string();
        self
    }

    /// Keys of the columns visible by default.
    #[must_use]
    pub fn default_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.default_visible)
            .map(|c| c.key.as_str())
            .collect()
    }

    /// Look up a column by key.
    #[must_use]
    pub fn find_column(&self, key: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Whether clicking the header of `key` sorts the table.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.find_column(key).is_some_and(|c| c.sortable)
    }

    /// Columns to show: the default ones, or all of them.
    #[must_use]
    pub fn visible_columns(&self, show_hidden: bool) -> Vec<&TableColumn> {
        self.columns
            .iter()
            .filter(|c| show_hidden || c.default_visible)
            .collect()
    }

    /// Cells of `row` for `columns`, `-` where the row has no value.
    #[must_use]
    pub fn render_row<R: TableCells>(row: &R, columns: &[&TableColumn]) -> Vec<String> {
        columns
            .iter()
            .map(|c| row.cell(&c.key).unwrap_or_else(|| "-".to_string()))
            .collect()
    }

    /// Look up a bulk action by key.
    #[must_use]
    pub fn find_bulk_action(&self, key: &str) -> Option<&BulkAction> {
        self.bulk_actions.iter().find(|a| a.key == key)
    }
}

/// Products table.
#[must_use]
pub fn products_table_config(page_size: usize) -> DataTableConfig {
    DataTableConfig::new("products", page_size)
        .column(TableColumn::sortable(ProductSortKey::Id.as_str(), "ID"))
        .column(TableColumn::sortable(ProductSortKey::Name.as_str(), "Name"))
        .column(TableColumn::sortable(ProductSortKey::Sku.as_str(), "SKU"))
        .column(TableColumn::new("category", "Category").hidden())
        .column(TableColumn::new("active", "Status"))
        .column(TableColumn::sortable(ProductSortKey::Price.as_str(), "Price"))
        .column(TableColumn::new("stock", "Stock").hidden())
        .bulk_actions(ProductBulkAction::ALL.iter().map(|a| BulkAction::from(*a)))
        .search_placeholder("Search by name or SKU...")
        .empty_message("No products found")
}

/// Orders table.
#[must_use]
pub fn orders_table_config(page_size: usize) -> DataTableConfig {
    let statuses = OrderStatus::ALL
        .iter()
        .map(|s| FilterOption::new(s.as_str(), s.label()))
        .collect();
    let payment_methods = [PaymentMethod::Card, PaymentMethod::Pix, PaymentMethod::Boleto]
        .iter()
        .map(|m| FilterOption::new(&m.to_string(), m.label()))
        .collect();

    DataTableConfig::new("orders", page_size)
        .column(TableColumn::sortable(OrderSortKey::Id.as_str(), "Order"))
        .column(TableColumn::sortable(OrderSortKey::Customer.as_str(), "Customer"))
        .column(TableColumn::sortable(OrderSortKey::Date.as_str(), "Date"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("payment", "Payment"))
        .column(TableColumn::new("items", "Items").hidden())
        .column(TableColumn::sortable(OrderSortKey::Total.as_str(), "Total"))
        .filter(TableFilter::select("status", "Status", statuses))
        .filter(TableFilter::select("paymentMethod", "Payment", payment_methods))
        .filter(TableFilter::date_range("date", "Order Date"))
        .bulk_actions(OrderBulkAction::ALL.iter().map(|a| BulkAction::from(*a)))
        .search_placeholder("Search by customer name...")
        .empty_message("No orders found")
}

/// Customers table.
#[must_use]
pub fn customers_table_config(page_size: usize) -> DataTableConfig {
    DataTableConfig::new("customers", page_size)
        .column(TableColumn::new("name", "Customer"))
        .column(TableColumn::new("cpf", "CPF"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("phone", "Phone"))
        .column(TableColumn::new("birth_date", "Birth date").hidden())
        .column(TableColumn::new("created", "Created").hidden())
        .bulk_actions(CustomerBulkAction::ALL.iter().map(|a| BulkAction::from(*a)))
        .search_placeholder("Search by name, CPF or email...")
        .empty_message("No customers found")
}

// =============================================================================
// Cells
// =============================================================================

impl TableCells for Product {
    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "sku" => Some(self.sku_or_dash().to_string()),
            "category" => self.category.as_ref().map(|c| c.name.clone()),
            "active" => Some(if self.active { "Active" } else { "Inactive" }.to_string()),
            "price" => Some(self.first_price().display()),
            "stock" => self.stocks.first().map(|s| s.quantity.to_string()),
            _ => None,
        }
    }
}

impl TableCells for Order {
    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(format!("#{}", self.id)),
            "customer" => Some(self.customer.full_name.clone()),
            "date" => Some(self.order_date.format("%Y-%m-%d %H:%M").to_string()),
            "status" => Some(self.status.label().to_string()),
            "payment" => Some(self.payment_method.label().to_string()),
            "items" => Some(self.item_count().to_string()),
            "total" => Some(format!("{:.2}", self.total_amount.round_dp(2))),
            _ => None,
        }
    }
}

impl TableCells for Customer {
    fn cell(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.full_name.clone()),
            "cpf" => Some(self.cpf.clone()),
            "email" => self.email().map(str::to_string),
            "phone" => Some(self.phone.clone()),
            "birth_date" => self.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            "created" => self.created_at.map(|d| d.format("%Y-%m-%d").to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_sortable_columns_match_grid_keys() {
        let config = products_table_config(30);
        for key in [
            ProductSortKey::Id,
            ProductSortKey::Name,
            ProductSortKey::Sku,
            ProductSortKey::Price,
        ] {
            assert!(config.is_sortable(key.as_str()), "{key:?}");
        }
        assert!(!config.is_sortable("active"));
        assert!(!config.is_sortable("missing"));
    }

    #[test]
    fn test_orders_status_filter_lists_every_status() {
        let config = orders_table_config(10);
        let status = config
            .filters
            .iter()
            .find(|f| f.key == "status")
            .unwrap_or_else(|| panic!("status filter missing"));
        assert_eq!(status.options.len(), OrderStatus::ALL.len());
        assert_eq!(status.kind, FilterKind::Select);
    }

    #[test]
    fn test_default_columns_skip_hidden() {
        let config = customers_table_config(20);
        let defaults = config.default_columns();
        assert!(defaults.contains(&"cpf"));
        assert!(!defaults.contains(&"birth_date"));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_bulk_actions_come_from_action_enums() {
        let products = products_table_config(30);
        let keys: Vec<&str> = products.bulk_actions.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["activate", "deactivate", "delete"]);
        assert!(products.find_bulk_action("delete").is_some_and(|a| a.destructive));

        let orders = orders_table_config(10);
        assert!(orders.find_bulk_action("mark_shipped").is_some_and(|a| !a.destructive));
        assert!(orders.find_bulk_action("activate").is_none());
    }

    #[test]
    fn test_every_column_key_has_a_cell() {
        let product: Product = serde_json::from_str(
            r#"{"id":5,"name":"Tee","sku":"T-5","active":true,
                "category":{"id":1,"name":"Shirts"},"prices":[{"price":"19.9"}],
                "stocks":[{"quantity":4}]}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        for column in &products_table_config(30).columns {
            assert!(product.cell(&column.key).is_some(), "{}", column.key);
        }

        let order: Order = serde_json::from_str(
            r#"{"id":10,"customer":{"id":4,"fullName":"Maria Souza"},
                "orderDate":"2025-03-01T12:30:00Z","totalAmount":150.5,
                "status":"paid","paymentMethod":"pix"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        for column in &orders_table_config(10).columns {
            assert!(order.cell(&column.key).is_some(), "{}", column.key);
        }
        assert_eq!(order.cell("total").as_deref(), Some("150.50"));
    }

    #[test]
    fn test_render_row_follows_visible_columns() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":3,"fullName":"Ana Lima","cpf":"123","phone":"9"}"#,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        let config = customers_table_config(20);

        let columns = config.visible_columns(false);
        assert_eq!(
            DataTableConfig::render_row(&customer, &columns),
            vec!["Ana Lima", "123", "-", "9"]
        );
        assert_eq!(config.visible_columns(true).len(), config.columns.len());
    }
}
