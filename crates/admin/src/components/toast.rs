//! Toast notifications reporting the outcome of an action.

use std::time::Duration;

use serde::Serialize;

use crate::api::ApiError;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// Error toast for a failed request: the server's `message` when it sent
    /// one, otherwise `fallback`.
    #[must_use]
    pub fn from_api_error(error: &ApiError, fallback: &str) -> Self {
        Self::error(error.server_message().unwrap_or(fallback))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, ToastKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Api {
            status: 409,
            message: "SKU already in use".to_string(),
        };
        let toast = Toast::from_api_error(&err, "Could not save product");
        assert_eq!(toast, Toast::error("SKU already in use"));
    }

    #[test]
    fn test_fallback_without_server_message() {
        let err = ApiError::Parse("products: expected a sequence".to_string());
        let toast = Toast::from_api_error(&err, "Could not load products");
        assert!(toast.is_error());
        assert_eq!(toast.message, "Could not load products");
    }
}
