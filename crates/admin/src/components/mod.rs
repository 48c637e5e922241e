//! View-model components shared by the admin screens.
//!
//! - `category_tree` - Flat category list to indented depth-first order
//! - `grid` - Client-side search, sort, pagination and selection
//! - `data_table` - Column, filter and bulk action definitions
//! - `toast` - Success/error notifications

pub mod category_tree;
pub mod data_table;
pub mod grid;
pub mod toast;

pub use category_tree::{CategoryTree, TreeNode, TreeReport};
pub use data_table::{DataTableConfig, TableCells};
pub use grid::{GridAction, GridRow, GridState, GridView, OrderGrid, ProductGrid, SelectionState, SortOrder};
pub use toast::{Toast, ToastKind};
