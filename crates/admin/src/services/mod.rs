//! Screen services built on the API client.
//!
//! # Services
//!
//! - `search` - Debounced, cancellable product/customer lookup
//! - `inventory` - Products joined with latest price and stock
//! - `order_draft` - New order form (customer, lines, total, submit)
//! - `product_workflow` - Product save with price and images, rolled back on failure
//! - `theme` - Persisted light/dark preference

pub mod bulk;
pub mod inventory;
pub mod order_draft;
pub mod product_workflow;
pub mod search;
pub mod theme;

pub use bulk::{BulkOutcome, CustomerBulkAction, OrderBulkAction, ProductBulkAction};
pub use inventory::{InventoryRow, InventorySummary};
pub use order_draft::{DraftError, OrderDraft};
pub use product_workflow::{ProductExtras, WorkflowError, WorkflowStep};
pub use search::{DebouncedSearch, SearchError};
pub use theme::{Theme, ThemeError};
