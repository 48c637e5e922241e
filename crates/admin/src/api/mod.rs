//! Back office REST API client.
//!
//! Provides typed access to the store's REST backend: categories, products,
//! orders, customers, users, promotions, CMS content, prices and stock.
//!
//! # Architecture
//!
//! - One shared [`ApiClient`] (cheap to clone, `Arc` inside)
//! - One module per resource adding methods to the client
//! - Every response is deserialized into [`types`] and checked with
//!   [`types::Validate`] before it is handed out
//! - Failures are never retried; callers surface them as notifications

pub mod categories;
pub mod client;
pub mod cms;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod types;
pub mod users;

pub use client::ApiClient;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The response (or an outgoing payload) broke a domain invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Message supplied by the server in the error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error body produced by the backend: `message` is either a string or a
/// list of validation messages.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    message: Option<MessageField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MessageField {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Extract the human-readable message from a raw error body.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        match parsed.message? {
            MessageField::One(msg) => Some(msg),
            MessageField::Many(msgs) if !msgs.is_empty() => Some(msgs.join("; ")),
            MessageField::Many(_) => None,
        }
    }
}
