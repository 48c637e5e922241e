//! Unified error handling for the admin screens.

use thiserror::Error;

use crate::api::ApiError;
use crate::components::Toast;
use crate::config::ConfigError;
use crate::services::{DraftError, SearchError, ThemeError, WorkflowError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// REST API request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Debounced search failed or was superseded.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Order draft was incomplete or could not be submitted.
    #[error("Order error: {0}")]
    Draft(#[from] DraftError),

    /// Product save workflow failed.
    #[error("Product error: {0}")]
    Workflow(#[from] WorkflowError),

    /// Theme preference could not be read or written.
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),
}

impl AppError {
    /// Whether the error is just a superseded search, which is not shown.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Search(SearchError::Superseded))
    }

    /// Toast reporting this error for an action whose generic failure text
    /// is `fallback`. Superseded searches produce no toast.
    ///
    /// User-correctable problems show their own text; request failures show
    /// the server's message when it sent one.
    #[must_use]
    pub fn to_toast(&self, fallback: &str) -> Option<Toast> {
        if self.is_superseded() {
            return None;
        }

        tracing::error!(error = %self, "Admin action failed");

        let toast = match self {
            Self::Api(e) | Self::Search(SearchError::Api(e)) | Self::Draft(DraftError::Api(e)) => {
                Toast::from_api_error(e, fallback)
            }
            Self::Draft(e) => Toast::error(e.to_string()),
            Self::Workflow(WorkflowError::Invalid(msg)) => Toast::error(msg.clone()),
            Self::Workflow(e) => e
                .api_error()
                .map_or_else(|| Toast::error(fallback), |api| Toast::from_api_error(api, fallback)),
            Self::Config(_) | Self::Theme(_) | Self::Search(SearchError::Superseded) => {
                Toast::error(fallback)
            }
        };
        Some(toast)
    }
}

#[cfg(test)]
mod tests {
    use backoffice_core::ProductId;

    use super::*;
    use crate::services::WorkflowStep;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(ApiError::NotFound("orders/9".to_string()));
        assert_eq!(err.to_string(), "API error: Not found: orders/9");

        let err = AppError::from(DraftError::NoItems);
        assert_eq!(err.to_string(), "Order error: Add at least one product");
    }

    #[test]
    fn test_superseded_search_is_silent() {
        let err = AppError::from(SearchError::Superseded);
        assert!(err.to_toast("Search failed").is_none());
    }

    #[test]
    fn test_toast_messages() {
        let server = ApiError::Api {
            status: 400,
            message: "CPF already registered".to_string(),
        };
        assert_eq!(
            AppError::from(server).to_toast("Could not save customer"),
            Some(Toast::error("CPF already registered"))
        );

        assert_eq!(
            AppError::from(DraftError::MissingCustomer).to_toast("Could not create order"),
            Some(Toast::error("Select a customer"))
        );

        let workflow = WorkflowError::Step {
            step: WorkflowStep::Price,
            product_id: ProductId::new(1),
            rolled_back: true,
            source: ApiError::Parse("bad body".to_string()),
        };
        assert_eq!(
            AppError::from(workflow).to_toast("Could not save product"),
            Some(Toast::error("Could not save product"))
        );
    }
}
