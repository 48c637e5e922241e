//! Product domain types.

use backoffice_core::{CategoryId, Price, ProductId, ProductImageId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Validate, require_non_negative, require_text, string_or_number};

/// A product as returned by `/products` and `/products/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub category: Option<CategorySummary>,
    /// Price history; the first entry is the one shown in listings.
    #[serde(default)]
    pub prices: Vec<ProductPrice>,
    #[serde(default)]
    pub stocks: Vec<StockLevel>,
}

/// Image attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub image_url: String,
    #[serde(default)]
    pub is_main: bool,
}

/// Minimal category embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

/// Raw price entry embedded in a product; kept as text because the backend
/// sends strings, numbers or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPrice {
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: Option<String>,
}

/// Stock level embedded in a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub quantity: i64,
}

impl Product {
    /// Listing price: the first price entry, zero when missing or unparsable.
    #[must_use]
    pub fn first_price(&self) -> Price {
        Price::parse_lenient(self.prices.first().and_then(|p| p.price.as_deref()))
    }

    /// Whether the product has a usable listing price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.prices
            .first()
            .and_then(|p| p.price.as_deref())
            .is_some_and(|raw| !raw.trim().is_empty())
    }

    /// SKU for display, `-` when absent.
    #[must_use]
    pub fn sku_or_dash(&self) -> &str {
        self.sku.as_deref().filter(|s| !s.is_empty()).unwrap_or("-")
    }

    /// The image flagged as main, if any.
    #[must_use]
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.images.iter().find(|img| img.is_main)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), String> {
        require_text("product name", &self.name)?;
        if self.first_price().is_negative() {
            return Err(format!("product {} has a negative price", self.id));
        }
        Ok(())
    }
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub sku: String,
    pub url: String,
    pub brand: String,
    pub active: bool,
    /// Category id; the create endpoint names this field `category`.
    pub category: Option<CategoryId>,
    pub meta_title: String,
    pub meta_description: String,
}

impl Validate for ProductInput {
    fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)?;
        require_text("sku", &self.sku)
    }
}

/// Payload for `PATCH /products/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// Payload for `POST /products/images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductImage {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub image_url: String,
    pub is_main: bool,
}

/// Payload for `POST /prices` when attaching a price to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductPrice {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Validate for NewProductPrice {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("price", self.price)
    }
}

/// Minimal body returned by create endpoints: only the id is relied upon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Created<Id> {
    pub id: Id,
}

impl<Id> Validate for Created<Id> {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_first_price_accepts_strings_and_numbers() {
        let p = product(r#"{"id":1,"name":"A","prices":[{"price":"19.90"},{"price":"5"}]}"#);
        assert_eq!(p.first_price().amount, Decimal::new(1990, 2));

        let p = product(r#"{"id":1,"name":"A","prices":[{"price":7.5}]}"#);
        assert_eq!(p.first_price().amount, Decimal::new(75, 1));
    }

    #[test]
    fn test_missing_or_invalid_price_is_zero() {
        let p = product(r#"{"id":1,"name":"A"}"#);
        assert_eq!(p.first_price(), Price::zero());
        assert!(!p.has_price());

        let p = product(r#"{"id":1,"name":"A","prices":[{"price":"n/a"}]}"#);
        assert_eq!(p.first_price(), Price::zero());
        assert!(p.has_price());
    }

    #[test]
    fn test_validation() {
        assert!(product(r#"{"id":1,"name":" "}"#).validate().is_err());
        assert!(product(r#"{"id":1,"name":"A","prices":[{"price":"-3"}]}"#).validate().is_err());
        assert!(product(r#"{"id":1,"name":"A","sku":"S1"}"#).validate().is_ok());
    }

    #[test]
    fn test_display_helpers() {
        let p = product(
            r#"{"id":1,"name":"A","sku":"","images":[
                {"id":1,"image_url":"a.png","is_main":false},
                {"id":2,"image_url":"b.png","is_main":true}]}"#,
        );
        assert_eq!(p.sku_or_dash(), "-");
        assert_eq!(p.main_image().map(|i| i.image_url.as_str()), Some("b.png"));
    }

    #[test]
    fn test_new_price_serializes_as_number() {
        let body = NewProductPrice {
            product_id: ProductId::new(3),
            price: Decimal::new(1250, 2),
        };
        let json = serde_json::to_value(&body).unwrap_or_default();
        assert_eq!(json["productId"], 3);
        assert_eq!(json["price"], 12.5);
    }
}
