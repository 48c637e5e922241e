//! Bulk actions over a grid selection.
//!
//! One request per selected id. A failure does not stop the run; the
//! outcome lists what went through and what did not.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use backoffice_core::{CustomerId, OrderId, OrderStatus, ProductId};
use tracing::{info, instrument, warn};

use crate::api::types::ProductPatch;
use crate::api::{ApiClient, ApiError};
use crate::components::data_table::BulkAction;

/// Result of a bulk run.
#[derive(Debug)]
pub struct BulkOutcome<Id> {
    pub succeeded: Vec<Id>,
    pub failed: Vec<(Id, ApiError)>,
}

impl<Id> BulkOutcome<Id> {
    /// Whether every request succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Error for an unknown bulk action key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bulk action: {0}")]
pub struct UnknownAction(pub String);

macro_rules! bulk_actions {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($key:literal, $label:literal, $destructive:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Key used by the table configuration.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Whether the action asks for confirmation first.
            #[must_use]
            pub const fn is_destructive(self) -> bool {
                match self {
                    $(Self::$variant => $destructive),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = UnknownAction;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|a| a.key() == s)
                    .ok_or_else(|| UnknownAction(s.to_string()))
            }
        }

        impl From<$name> for BulkAction {
            fn from(action: $name) -> Self {
                let bulk = Self::new(action.key(), action.label());
                if action.is_destructive() { bulk.destructive() } else { bulk }
            }
        }
    };
}

bulk_actions! {
    /// Bulk actions of the products table.
    ProductBulkAction {
        Activate => ("activate", "Activate", false),
        Deactivate => ("deactivate", "Deactivate", false),
        Delete => ("delete", "Delete", true),
    }
}

bulk_actions! {
    /// Bulk actions of the orders table.
    OrderBulkAction {
        MarkShipped => ("mark_shipped", "Mark as shipped", false),
        Delete => ("delete", "Delete", true),
    }
}

bulk_actions! {
    /// Bulk actions of the customers table.
    CustomerBulkAction {
        Delete => ("delete", "Delete", true),
    }
}

async fn run_each<Id, F, Fut>(action: &str, ids: &[Id], mut op: F) -> BulkOutcome<Id>
where
    Id: Copy + fmt::Display,
    F: FnMut(Id) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let mut outcome = BulkOutcome {
        succeeded: Vec::with_capacity(ids.len()),
        failed: Vec::new(),
    };

    for &id in ids {
        match op(id).await {
            Ok(()) => outcome.succeeded.push(id),
            Err(e) => {
                warn!(%id, action, error = %e, "bulk action failed for row");
                outcome.failed.push((id, e));
            }
        }
    }

    if outcome.is_complete() {
        info!(action, count = outcome.succeeded.len(), "bulk action completed");
    } else {
        warn!(
            action,
            success = outcome.succeeded.len(),
            errors = outcome.failed.len(),
            "bulk action completed with errors"
        );
    }
    outcome
}

/// Apply `action` to every product in `ids`.
#[instrument(skip(api, ids), fields(count = ids.len()))]
pub async fn products(
    api: &ApiClient,
    action: ProductBulkAction,
    ids: &[ProductId],
) -> BulkOutcome<ProductId> {
    let active = match action {
        ProductBulkAction::Activate => true,
        ProductBulkAction::Deactivate => false,
        ProductBulkAction::Delete => {
            return run_each(action.key(), ids, move |id| api.delete_product(id)).await;
        }
    };

    let patch = ProductPatch {
        active: Some(active),
        ..ProductPatch::default()
    };
    let patch = &patch;
    run_each(action.key(), ids, move |id| api.update_product(id, patch)).await
}

/// Apply `action` to every order in `ids`.
#[instrument(skip(api, ids), fields(count = ids.len()))]
pub async fn orders(api: &ApiClient, action: OrderBulkAction, ids: &[OrderId]) -> BulkOutcome<OrderId> {
    match action {
        OrderBulkAction::MarkShipped => {
            run_each(action.key(), ids, move |id| {
                api.update_order_status(id, OrderStatus::Shipped)
            })
            .await
        }
        OrderBulkAction::Delete => {
            run_each(action.key(), ids, move |id| api.delete_order(id)).await
        }
    }
}

/// Apply `action` to every customer in `ids`.
#[instrument(skip(api, ids), fields(count = ids.len()))]
pub async fn customers(
    api: &ApiClient,
    action: CustomerBulkAction,
    ids: &[CustomerId],
) -> BulkOutcome<CustomerId> {
    match action {
        CustomerBulkAction::Delete => {
            run_each(action.key(), ids, move |id| api.delete_customer(id)).await
        }
    }
}
