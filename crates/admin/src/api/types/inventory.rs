//! Price and stock records (`/prices`, `/stock`).
//!
//! The backend identifies the owning product either with a flat `productId`
//! or with an embedded `product: {id}` depending on the endpoint version, so
//! both shapes are normalised into a single `product_id` at deserialization.

use backoffice_core::{PriceId, ProductId, StockId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Validate, require_non_negative};

#[derive(Debug, Deserialize)]
struct ProductIdRef {
    id: ProductId,
}

fn resolve_product_id(
    flat: Option<ProductId>,
    nested: Option<ProductIdRef>,
) -> Result<ProductId, String> {
    flat.or(nested.map(|p| p.id))
        .ok_or_else(|| "record has neither productId nor product.id".to_string())
}

/// A price record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRecord", rename_all = "camelCase")]
pub struct PriceRecord {
    pub id: PriceId,
    pub product_id: ProductId,
    pub price: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPriceRecord {
    id: PriceId,
    #[serde(default)]
    product_id: Option<ProductId>,
    #[serde(default)]
    product: Option<ProductIdRef>,
    price: Decimal,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawPriceRecord> for PriceRecord {
    type Error = String;

    fn try_from(raw: RawPriceRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            product_id: resolve_product_id(raw.product_id, raw.product)?,
            price: raw.price,
            created_at: raw.created_at,
        })
    }
}

impl Validate for PriceRecord {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("price", self.price)
    }
}

/// A stock record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStockRecord", rename_all = "camelCase")]
pub struct StockRecord {
    pub id: StockId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStockRecord {
    id: StockId,
    #[serde(default)]
    product_id: Option<ProductId>,
    #[serde(default)]
    product: Option<ProductIdRef>,
    quantity: i64,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawStockRecord> for StockRecord {
    type Error = String;

    fn try_from(raw: RawStockRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            product_id: resolve_product_id(raw.product_id, raw.product)?,
            quantity: raw.quantity,
            updated_at: raw.updated_at,
        })
    }
}

impl Validate for StockRecord {
    fn validate(&self) -> Result<(), String> {
        if self.quantity < 0 {
            return Err(format!("stock {} has negative quantity", self.id));
        }
        Ok(())
    }
}

/// Payload for `POST /stock`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl Validate for NewStock {
    fn validate(&self) -> Result<(), String> {
        require_non_negative_quantity(self.quantity)
    }
}

/// Payload for `PATCH /stock/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockUpdate {
    pub quantity: i64,
}

impl Validate for StockUpdate {
    fn validate(&self) -> Result<(), String> {
        require_non_negative_quantity(self.quantity)
    }
}

fn require_non_negative_quantity(quantity: i64) -> Result<(), String> {
    if quantity < 0 {
        Err(format!("quantity must not be negative (got {quantity})"))
    } else {
        Ok(())
    }
}

/// Payload for `PATCH /prices/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceUpdate {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Validate for PriceUpdate {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("price", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_either_shape() {
        let flat: PriceRecord =
            serde_json::from_str(r#"{"id": 1, "productId": 9, "price": 10}"#)
                .unwrap_or_else(|e| panic!("{e}"));
        let nested: PriceRecord =
            serde_json::from_str(r#"{"id": 2, "product": {"id": 9}, "price": "12.5"}"#)
                .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(flat.product_id, ProductId::new(9));
        assert_eq!(nested.product_id, ProductId::new(9));
        assert_eq!(nested.price, Decimal::new(125, 1));
    }

    #[test]
    fn test_missing_product_reference_is_rejected() {
        let result = serde_json::from_str::<StockRecord>(r#"{"id": 1, "quantity": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_stock_fails_validation() {
        let stock: StockRecord =
            serde_json::from_str(r#"{"id": 1, "productId": 2, "quantity": -1}"#)
                .unwrap_or_else(|e| panic!("{e}"));
        assert!(stock.validate().is_err());
    }

    #[test]
    fn test_outgoing_quantities_are_checked() {
        assert!(StockUpdate { quantity: -2 }.validate().is_err());
        assert!(StockUpdate { quantity: 0 }.validate().is_ok());
        let price = PriceUpdate { price: Decimal::new(-1, 0) };
        assert!(price.validate().is_err());
    }
}
