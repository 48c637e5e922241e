//! Order domain types.

use backoffice_core::{
    AddressId, CustomerId, OrderId, OrderItemId, OrderStatus, PaymentMethod, ProductId,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Validate, require_non_negative};

/// Customer summary embedded in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub id: CustomerId,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Product summary embedded in an order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product: OrderProduct,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// An order as returned by `/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: OrderCustomer,
    #[serde(default)]
    pub address: Option<Address>,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub shipping_fee: Decimal,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Number of lines on the order.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Validate for Order {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("order total", self.total_amount)?;
        require_non_negative("shipping fee", self.shipping_fee)?;
        for item in &self.items {
            if item.quantity == 0 {
                return Err(format!("order {} has a zero-quantity line", self.id));
            }
            require_non_negative("unit price", item.unit_price)?;
        }
        Ok(())
    }
}

/// Query parameters accepted by `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<OrderStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl OrdersQuery {
    /// Query-string pairs, omitting unset and blank values.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Header of a new order (`order` part of the create body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderHeader {
    pub customer_id: CustomerId,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
}

/// Line of a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /orders`: `{ "order": {...}, "items": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub order: NewOrderHeader,
    pub items: Vec<NewOrderItem>,
}

/// Body of `PATCH /orders/{id}` for status changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Count and revenue over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    pub count: u64,
    pub total: Decimal,
}

/// Response of `GET /orders/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub today: PeriodStats,
    pub month: PeriodStats,
}

impl Validate for OrderStats {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("today total", self.today.total)?;
        require_non_negative("month total", self.month.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: &str = r#"{
        "id": 10,
        "customer": {"id": 4, "fullName": "Maria Souza"},
        "orderDate": "2025-03-01T12:30:00Z",
        "totalAmount": 150.5,
        "status": "paid",
        "paymentMethod": "pix",
        "shippingFee": "10.00",
        "items": [{"id": 1, "product": {"id": 7, "name": "Tee"}, "quantity": 2, "unitPrice": 70.25}]
    }"#;

    #[test]
    fn test_deserializes_order() {
        let order: Order = serde_json::from_str(ORDER).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(order.customer.full_name, "Maria Souza");
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.total_amount, Decimal::new(1505, 1));
        assert_eq!(order.item_count(), 1);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_quantity_line() {
        let json = ORDER.replace("\"quantity\": 2", "\"quantity\": 0");
        let order: Order = serde_json::from_str(&json).unwrap_or_else(|e| panic!("{e}"));
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_query_pairs_skip_blank_values() {
        let query = OrdersQuery {
            page: Some(2),
            limit: Some(10),
            search: Some("  ".to_string()),
            status: Some(OrderStatus::Shipped),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            end_date: None,
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("status", "shipped".to_string()),
                ("startDate", "2025-01-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_order_body_is_nested() {
        let body = NewOrder {
            order: NewOrderHeader {
                customer_id: CustomerId::new(4),
                payment_method: PaymentMethod::Card,
                status: OrderStatus::Pending,
            },
            items: vec![NewOrderItem {
                product_id: ProductId::new(7),
                quantity: 3,
            }],
        };
        let json = serde_json::to_value(&body).unwrap_or_default();
        assert_eq!(json["order"]["customerId"], 4);
        assert_eq!(json["order"]["paymentMethod"], "card");
        assert_eq!(json["items"][0]["productId"], 7);
        assert_eq!(json["items"][0]["quantity"], 3);
    }
}
