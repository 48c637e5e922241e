//! Inventory view: products joined with their latest price and stock.

use std::collections::HashMap;

use backoffice_core::{PriceId, ProductId, StockId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::api::types::{
    NewProductPrice, NewStock, PriceRecord, PriceUpdate, Product, StockRecord, StockUpdate,
};
use crate::api::{ApiClient, ApiError};

/// Stock below this quantity is flagged as low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Current price of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentPrice {
    pub id: PriceId,
    pub amount: Decimal,
}

/// Current stock of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentStock {
    pub id: StockId,
    pub quantity: i64,
}

/// One line of the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub product_id: ProductId,
    pub name: String,
    pub sku: Option<String>,
    pub active: bool,
    pub price: Option<CurrentPrice>,
    pub stock: Option<CurrentStock>,
}

impl InventoryRow {
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.stock
            .is_some_and(|s| s.quantity < LOW_STOCK_THRESHOLD)
    }

    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .sku
                .as_deref()
                .is_some_and(|sku| sku.to_lowercase().contains(term))
    }
}

/// Header counters of the inventory screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total: usize,
    pub with_price: usize,
    pub with_stock: usize,
    pub low_stock: usize,
}

/// Join products with their most recent price (by creation time) and their
/// stock record.
///
/// Prices without a timestamp count as older than any dated price; among
/// equally recent prices the first one listed wins.
#[must_use]
pub fn join(products: &[Product], prices: &[PriceRecord], stock: &[StockRecord]) -> Vec<InventoryRow> {
    let mut latest: HashMap<ProductId, &PriceRecord> = HashMap::new();
    for price in prices {
        latest
            .entry(price.product_id)
            .and_modify(|current| {
                if price.created_at > current.created_at {
                    *current = price;
                }
            })
            .or_insert(price);
    }

    let mut stock_by_product: HashMap<ProductId, &StockRecord> = HashMap::new();
    for record in stock {
        stock_by_product.entry(record.product_id).or_insert(record);
    }

    products
        .iter()
        .map(|product| InventoryRow {
            product_id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            active: product.active,
            price: latest.get(&product.id).map(|p| CurrentPrice {
                id: p.id,
                amount: p.price,
            }),
            stock: stock_by_product.get(&product.id).map(|s| CurrentStock {
                id: s.id,
                quantity: s.quantity,
            }),
        })
        .collect()
}

#[must_use]
pub fn summarize(rows: &[InventoryRow]) -> InventorySummary {
    InventorySummary {
        total: rows.len(),
        with_price: rows.iter().filter(|r| r.price.is_some()).count(),
        with_stock: rows.iter().filter(|r| r.stock.is_some()).count(),
        low_stock: rows.iter().filter(|r| r.is_low_stock()).count(),
    }
}

/// Rows whose name or SKU contains `term`, ignoring case.
#[must_use]
pub fn search<'a>(rows: &'a [InventoryRow], term: &str) -> Vec<&'a InventoryRow> {
    let term = term.to_lowercase();
    rows.iter().filter(|r| term.is_empty() || r.matches(&term)).collect()
}

/// Fetch products, prices and stock concurrently and join them.
///
/// # Errors
///
/// Returns the first error of the three requests.
#[instrument(skip(api))]
pub async fn load(api: &ApiClient) -> Result<Vec<InventoryRow>, ApiError> {
    let (products, prices, stock) =
        tokio::try_join!(api.list_products(), api.list_prices(), api.list_stock())?;
    let rows = join(&products, &prices, &stock);
    info!(products = rows.len(), "inventory loaded");
    Ok(rows)
}

/// Set the price of a row: update the current record, or create one.
///
/// # Errors
///
/// Returns error if the API request fails.
#[instrument(skip(api, row), fields(product_id = %row.product_id))]
pub async fn save_price(api: &ApiClient, row: &InventoryRow, amount: Decimal) -> Result<(), ApiError> {
    match row.price {
        Some(current) => api.update_price(current.id, PriceUpdate { price: amount }).await,
        None => {
            api.create_price(&NewProductPrice {
                product_id: row.product_id,
                price: amount,
            })
            .await
        }
    }
}

/// Set the stock of a row: update the current record, or create one.
///
/// # Errors
///
/// Returns error if the API request fails.
#[instrument(skip(api, row), fields(product_id = %row.product_id))]
pub async fn save_stock(api: &ApiClient, row: &InventoryRow, quantity: i64) -> Result<(), ApiError> {
    match row.stock {
        Some(current) => api.update_stock(current.id, StockUpdate { quantity }).await,
        None => {
            api.create_stock(NewStock {
                product_id: row.product_id,
                quantity,
            })
            .await
        }
    }
}
