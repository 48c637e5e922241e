//! Back office admin library.
//!
//! Everything behind the store's admin screens except rendering: a typed
//! client for the REST API, the category tree and grid view models, and the
//! screen services (debounced search, inventory, order draft, product save
//! workflow, theme preference).
//!
//! # Layout
//!
//! - [`config`] - Environment configuration
//! - [`api`] - REST client, one module per resource, validated types
//! - [`components`] - Category tree, grid engine, table configs, toasts
//! - [`services`] - Multi-request flows and client-side preferences
//! - [`state`] - Shared client, search boxes and grid factories
//! - [`error`] - Unified error type and its toast mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use config::{AdminConfig, ConfigError};
pub use error::AppError;
pub use state::AdminState;
