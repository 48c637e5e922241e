//! Promotion domain types.

use backoffice_core::{ProductId, PromotionId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Validate, require_non_negative};

/// Product summary embedded in a promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionProduct {
    pub id: ProductId,
    pub name: String,
}

/// A time-boxed promotional price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: PromotionId,
    pub product: PromotionProduct,
    pub promotional_price: Decimal,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    #[serde(default)]
    pub active: bool,
}

impl Promotion {
    /// Whether the promotion is switched on and `now` falls inside its window.
    #[must_use]
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.active && self.start_at <= now && now <= self.end_at
    }
}

impl Validate for Promotion {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("promotional price", self.promotional_price)?;
        if self.end_at < self.start_at {
            return Err(format!("promotion {} ends before it starts", self.id));
        }
        Ok(())
    }
}

/// Payload for `POST /promotions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionInput {
    pub product_id: ProductId,
    #[serde(with = "rust_decimal::serde::float")]
    pub promotional_price: Decimal,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub active: bool,
}

impl Validate for PromotionInput {
    fn validate(&self) -> Result<(), String> {
        require_non_negative("promotional price", self.promotional_price)?;
        if self.end_at < self.start_at {
            return Err("end date must not be before start date".to_string());
        }
        Ok(())
    }
}

/// Payload for `PATCH /promotions/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option",
        default
    )]
    pub promotional_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn promotion(active: bool) -> Promotion {
        Promotion {
            id: PromotionId::new(1),
            product: PromotionProduct {
                id: ProductId::new(2),
                name: "Tee".to_string(),
            },
            promotional_price: Decimal::new(4990, 2),
            start_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default(),
            end_at: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).single().unwrap_or_default(),
            active,
        }
    }

    #[test]
    fn test_running_window() {
        let mid = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).single().unwrap_or_default();
        let after = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).single().unwrap_or_default();
        assert!(promotion(true).is_running_at(mid));
        assert!(!promotion(true).is_running_at(after));
        assert!(!promotion(false).is_running_at(mid));
    }

    #[test]
    fn test_inverted_window_fails_validation() {
        let mut p = promotion(true);
        std::mem::swap(&mut p.start_at, &mut p.end_at);
        assert!(p.validate().is_err());
    }
}
