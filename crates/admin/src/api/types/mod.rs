//! Typed request and response shapes for the back office REST API.
//!
//! Every response is deserialized into these structs and then checked with
//! [`Validate`] before it reaches a screen. Field names follow the backend's
//! JSON (a mix of camelCase and `snake_case`), mapped with serde attributes.

mod category;
mod cms;
mod customer;
mod inventory;
mod order;
mod product;
mod promotion;
mod user;

pub use category::*;
pub use cms::*;
pub use customer::*;
pub use inventory::*;
pub use order::*;
pub use product::*;
pub use promotion::*;
pub use user::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Post-deserialization checks applied at the API boundary.
pub trait Validate {
    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a human-readable description of the first violation.
    fn validate(&self) -> Result<(), String>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), String> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, item)| item.validate().map_err(|e| format!("item {i}: {e}")))
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), String> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

/// Response bodies that are not checked beyond their shape.
impl Validate for serde_json::Value {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// `{ "data": [...] }` wrapper used by some list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

impl<T: Validate> Validate for DataEnvelope<T> {
    fn validate(&self) -> Result<(), String> {
        self.data.validate()
    }
}

/// `{ "data": [...], "total": n }` page returned by server-paged endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T: Validate> Validate for Page<T> {
    fn validate(&self) -> Result<(), String> {
        self.data.validate()
    }
}

/// Reject blank required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

/// Reject negative decimal amounts.
pub(crate) fn require_non_negative(field: &str, value: rust_decimal::Decimal) -> Result<(), String> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(format!("{field} must not be negative (got {value})"))
    } else {
        Ok(())
    }
}

/// Deserialize a value the backend sends either as a JSON string or number
/// into its string form.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "string_or_number")]
        value: Option<String>,
    }

    fn parse(json: &str) -> Option<String> {
        serde_json::from_str::<Wrapper>(json).ok().and_then(|w| w.value)
    }

    #[test]
    fn test_string_or_number() {
        assert_eq!(parse(r#"{"value":"19.90"}"#).as_deref(), Some("19.90"));
        assert_eq!(parse(r#"{"value":42}"#).as_deref(), Some("42"));
        assert_eq!(parse(r#"{"value":null}"#), None);
        assert_eq!(parse("{}"), None);
    }

    #[test]
    fn test_vec_validation_reports_index() {
        struct Item(bool);
        impl Validate for Item {
            fn validate(&self) -> Result<(), String> {
                if self.0 { Ok(()) } else { Err("bad".to_string()) }
            }
        }

        let items = vec![Item(true), Item(false)];
        assert_eq!(items.validate(), Err("item 1: bad".to_string()));
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_text("name", "  ").is_err());
        assert!(require_text("name", "Shoes").is_ok());
        assert!(require_non_negative("price", rust_decimal::Decimal::new(-1, 2)).is_err());
        assert!(require_non_negative("price", rust_decimal::Decimal::ZERO).is_ok());
    }
}
