//! Back office core - shared types library.
//!
//! This crate provides the types shared by every back office component:
//! - `admin` - Typed REST client and screen view-models
//! - `cli` - Terminal front-end over the admin library
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
