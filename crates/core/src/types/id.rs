//! Newtype IDs for type-safe entity references.
//!
//! Every resource exposed by the back office REST API is keyed by an integer
//! id. The `define_id!` macro gives each resource its own id type so that a
//! `CategoryId` can never be passed where a `ProductId` is expected.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `get()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use backoffice_core::define_id;
/// define_id!(WidgetId);
/// define_id!(GadgetId);
///
/// let widget = WidgetId::new(1);
/// let gadget = GadgetId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: WidgetId = gadget;
/// assert_eq!(widget.get(), gadget.get());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ProductId);
define_id!(ProductImageId);
define_id!(PriceId);
define_id!(StockId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(AddressId);
define_id!(CustomerId);
define_id!(UserId);
define_id!(PromotionId);
define_id!(CmsPageId);
define_id!(BannerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let id = CategoryId::new(42);
        assert_eq!(serde_json::to_string(&id).ok().as_deref(), Some("42"));

        let parsed: ProductId = serde_json::from_str("7").unwrap_or(ProductId::new(0));
        assert_eq!(parsed, ProductId::new(7));
    }

    #[test]
    fn test_ids_order_numerically() {
        let mut ids = vec![OrderId::new(10), OrderId::new(2), OrderId::new(33)];
        ids.sort();
        assert_eq!(ids, vec![OrderId::new(2), OrderId::new(10), OrderId::new(33)]);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(CustomerId::from(5).to_string(), "5");
        assert_eq!(i64::from(UserId::new(9)), 9);
    }
}
