//! New order form state.
//!
//! Holds the chosen customer and product lines until the order is
//! submitted. Adding a product already on the draft merges quantities.

use backoffice_core::{CustomerId, OrderStatus, PaymentMethod, Price, ProductId};
use thiserror::Error;
use tracing::{info, instrument};

use crate::api::types::{Customer, NewOrder, NewOrderHeader, NewOrderItem, Product};
use crate::api::{ApiClient, ApiError};

/// Errors from building or submitting an order draft.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Select a customer")]
    MissingCustomer,

    #[error("Add at least one product")]
    NoItems,

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A product line on the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product: Product,
    pub quantity: u32,
}

impl DraftLine {
    /// Unit price (first listed price, zero if absent) times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.first_price().times(self.quantity)
    }
}

/// An order being put together.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    customer: Option<Customer>,
    lines: Vec<DraftLine>,
    payment_method: PaymentMethod,
    status: OrderStatus,
}

impl OrderDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    pub fn clear_customer(&mut self) {
        self.customer = None;
    }

    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub const fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub const fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::ZeroQuantity` if `quantity` is 0.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), DraftError> {
        if quantity == 0 {
            return Err(DraftError::ZeroQuantity);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(DraftLine { product, quantity });
        }
        Ok(())
    }

    /// Remove the line for `product_id`; returns whether one was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Running total of all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::zero(), |acc, line| acc.plus(&line.subtotal()))
    }

    /// Build the `POST /orders` body.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::MissingCustomer` or `DraftError::NoItems` when
    /// the draft is incomplete.
    pub fn to_request(&self) -> Result<NewOrder, DraftError> {
        let customer_id: CustomerId = self
            .customer
            .as_ref()
            .map(|c| c.id)
            .ok_or(DraftError::MissingCustomer)?;
        if self.lines.is_empty() {
            return Err(DraftError::NoItems);
        }

        Ok(NewOrder {
            order: NewOrderHeader {
                customer_id,
                payment_method: self.payment_method,
                status: self.status,
            },
            items: self
                .lines
                .iter()
                .map(|l| NewOrderItem {
                    product_id: l.product.id,
                    quantity: l.quantity,
                })
                .collect(),
        })
    }

    /// Validate and submit the draft.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete draft, or
    /// `DraftError::Api` if the request fails.
    #[instrument(skip(self, api), fields(lines = self.lines.len()))]
    pub async fn submit(&self, api: &ApiClient) -> Result<(), DraftError> {
        let request = self.to_request()?;
        api.create_order(&request).await?;
        info!(customer_id = %request.order.customer_id, "order created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64, price: Option<&str>) -> Product {
        let prices = price.map_or_else(String::new, |p| format!(r#"{{"price":"{p}"}}"#));
        serde_json::from_str(&format!(r#"{{"id":{id},"name":"P{id}","prices":[{prices}]}}"#))
            .unwrap_or_else(|e| panic!("{e}"))
    }

    fn customer() -> Customer {
        serde_json::from_str(r#"{"id": 7, "fullName": "Maria Souza", "cpf": "123", "phone": "1"}"#)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_adding_same_product_merges_quantity() {
        let mut draft = OrderDraft::new();
        draft.add(product(1, Some("10")), 2).unwrap_or_else(|e| panic!("{e}"));
        draft.add(product(1, Some("10")), 3).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].quantity, 5);
    }

    #[test]
    fn test_total_uses_first_price_and_zero_when_missing() {
        let mut draft = OrderDraft::new();
        draft.add(product(1, Some("19.90")), 2).unwrap_or_else(|e| panic!("{e}"));
        draft.add(product(2, None), 4).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(draft.total().amount, Decimal::new(3980, 2));
    }

    #[test]
    fn test_total_of_huge_prices_saturates() {
        let mut draft = OrderDraft::new();
        let max = "79228162514264337593543950335";
        draft.add(product(1, Some(max)), 2).unwrap_or_else(|e| panic!("{e}"));
        draft.add(product(2, Some(max)), u32::MAX).unwrap_or_else(|e| panic!("{e}"));
        draft.add(product(2, Some(max)), 1).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(draft.total().amount, Decimal::MAX);
    }

    #[test]
    fn test_remove_line() {
        let mut draft = OrderDraft::new();
        draft.add(product(1, None), 1).unwrap_or_else(|e| panic!("{e}"));
        assert!(draft.remove(ProductId::new(1)));
        assert!(!draft.remove(ProductId::new(1)));
        assert!(draft.lines().is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut draft = OrderDraft::new();
        assert!(matches!(draft.add(product(1, None), 0), Err(DraftError::ZeroQuantity)));
    }

    #[test]
    fn test_request_requires_customer_and_items() {
        let mut draft = OrderDraft::new();
        assert!(matches!(draft.to_request(), Err(DraftError::MissingCustomer)));

        draft.select_customer(customer());
        assert!(matches!(draft.to_request(), Err(DraftError::NoItems)));
    }

    #[test]
    fn test_request_body_shape() {
        let mut draft = OrderDraft::new();
        draft.select_customer(customer());
        draft.set_payment_method(PaymentMethod::Card);
        draft.add(product(3, Some("5")), 2).unwrap_or_else(|e| panic!("{e}"));

        let body = draft
            .to_request()
            .map(|r| serde_json::to_value(r).unwrap_or_default())
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            body,
            serde_json::json!({
                "order": {"customerId": 7, "paymentMethod": "card", "status": "pending"},
                "items": [{"productId": 3, "quantity": 2}]
            })
        );
    }
}
