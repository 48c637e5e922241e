//! Type-safe price representation using decimal arithmetic.
//!
//! The REST backend is inconsistent about prices: product listings carry them
//! as strings (`"19.90"`), the price resource carries them as JSON numbers,
//! and older products may have no price at all. [`Price::parse_lenient`]
//! normalises all of that into a decimal amount where anything missing or
//! unparsable counts as zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the store's default currency.
    #[must_use]
    pub fn from_amount(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }

    /// A zero price in the store's default currency.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_amount(Decimal::ZERO)
    }

    /// Parse a raw price, treating missing, blank or malformed input as zero.
    ///
    /// ```rust
    /// # use backoffice_core::Price;
    /// # use rust_decimal::Decimal;
    /// assert_eq!(Price::parse_lenient(Some("19.90")).amount, Decimal::new(1990, 2));
    /// assert_eq!(Price::parse_lenient(Some("abc")), Price::zero());
    /// assert_eq!(Price::parse_lenient(None), Price::zero());
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| {
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .ok()
            })
            .map_or_else(Self::zero, Self::from_amount)
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiply by a quantity (line totals), saturating at the largest
    /// representable amount.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }

    /// Add another amount in the same currency, saturating on overflow.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.amount.saturating_add(other.amount), self.currency_code)
    }

    /// Format for display (e.g., "R$ 19.90").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency_code.symbol(), self.amount.round_dp(2))
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_accepts_padded_values() {
        assert_eq!(Price::parse_lenient(Some(" 5.5 ")).amount, Decimal::new(55, 1));
        assert_eq!(Price::parse_lenient(Some("")), Price::zero());
        assert_eq!(Price::parse_lenient(Some("12,50")), Price::zero());
    }

    #[test]
    fn test_parse_lenient_accepts_exponent_form() {
        assert_eq!(Price::parse_lenient(Some("1e3")).amount, Decimal::new(1000, 0));
        assert_eq!(Price::parse_lenient(Some("2.5e-1")).amount, Decimal::new(25, 2));
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Price::parse_lenient(Some("79228162514264337593543950335"));
        assert_eq!(huge.amount, Decimal::MAX);
        assert_eq!(huge.times(2).amount, Decimal::MAX);
        assert_eq!(huge.plus(&huge).amount, Decimal::MAX);
        assert_eq!(
            Price::from_amount(Decimal::new(1990, 2)).times(3).amount,
            Decimal::new(5970, 2)
        );
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let price = Price::from_amount(Decimal::new(19_999, 3));
        assert_eq!(price.display(), "R$ 20.00");
        assert_eq!(Price::zero().display(), "R$ 0.00");
    }

    #[test]
    fn test_times_and_sign() {
        let price = Price::from_amount(Decimal::new(250, 2));
        assert_eq!(price.times(4).amount, Decimal::new(1000, 2));
        assert!(!price.is_negative());
        assert!(Price::from_amount(Decimal::new(-1, 0)).is_negative());
        assert!(!Price::zero().is_negative());
    }
}
