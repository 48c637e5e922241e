//! Product save workflow.
//!
//! Saving the product form touches several endpoints in order: the product
//! itself, then its price, then the main image, then any extra images. When
//! a new product was created and a later step fails, the product is deleted
//! again so a half-built product does not linger in the catalogue.

use std::fmt;

use backoffice_core::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::api::types::{
    NewProductImage, NewProductPrice, ProductInput, ProductPatch, Validate, require_non_negative,
};
use crate::api::{ApiClient, ApiError};

/// Step after the product itself was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Price,
    MainImage,
    /// Extra image, by position in the form.
    ExtraImage(usize),
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => f.write_str("save price"),
            Self::MainImage => f.write_str("save main image"),
            Self::ExtraImage(i) => write!(f, "save extra image {}", i + 1),
        }
    }
}

/// Errors from saving the product form.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Invalid product: {0}")]
    Invalid(String),

    #[error("Failed to save product: {0}")]
    Product(#[source] ApiError),

    /// A follow-up step failed. `rolled_back` tells whether the newly
    /// created product was deleted again.
    #[error("Failed to {step} for product {product_id}: {source}")]
    Step {
        step: WorkflowStep,
        product_id: ProductId,
        rolled_back: bool,
        #[source]
        source: ApiError,
    },
}

impl WorkflowError {
    /// Underlying API error, if a request failed.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Invalid(_) => None,
            Self::Product(e) | Self::Step { source: e, .. } => Some(e),
        }
    }
}

/// Price and images entered alongside the product fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductExtras {
    pub price: Option<Decimal>,
    pub main_image: Option<String>,
    pub extra_images: Vec<String>,
}

impl ProductExtras {
    /// Image steps to run, skipping blank URLs.
    fn image_steps(&self) -> Vec<(WorkflowStep, NewImage<'_>)> {
        let main = self
            .main_image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| (WorkflowStep::MainImage, NewImage { url, is_main: true }));
        let extras = self
            .extra_images
            .iter()
            .enumerate()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(i, url)| (WorkflowStep::ExtraImage(i), NewImage { url, is_main: false }));
        main.into_iter().chain(extras).collect()
    }
}

struct NewImage<'a> {
    url: &'a str,
    is_main: bool,
}

/// Create a product with its price and images.
///
/// # Errors
///
/// Returns `WorkflowError::Invalid` before any request if the form is
/// incomplete, `WorkflowError::Product` if the product cannot be created,
/// or `WorkflowError::Step` if a later step fails (after trying to delete
/// the new product).
#[instrument(skip(api, input, extras), fields(sku = %input.sku))]
pub async fn create_product(
    api: &ApiClient,
    input: &ProductInput,
    extras: &ProductExtras,
) -> Result<ProductId, WorkflowError> {
    input.validate().map_err(WorkflowError::Invalid)?;
    if let Some(price) = extras.price {
        require_non_negative("price", price).map_err(WorkflowError::Invalid)?;
    }

    let product_id = api
        .create_product(input)
        .await
        .map_err(WorkflowError::Product)?;

    if let Err((step, source)) = save_extras(api, product_id, extras).await {
        let rolled_back = match api.delete_product(product_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%product_id, error = %e, "could not delete partially created product");
                false
            }
        };
        warn!(%product_id, %step, rolled_back, "product creation failed");
        return Err(WorkflowError::Step {
            step,
            product_id,
            rolled_back,
            source,
        });
    }

    info!(%product_id, "product created");
    Ok(product_id)
}

/// Update an existing product and append its price and images.
///
/// Nothing is rolled back on failure; the product existed before.
///
/// # Errors
///
/// Returns `WorkflowError::Product` if the update fails, or
/// `WorkflowError::Step` if a later step fails.
#[instrument(skip(api, patch, extras), fields(product_id = %product_id))]
pub async fn update_product(
    api: &ApiClient,
    product_id: ProductId,
    patch: &ProductPatch,
    extras: &ProductExtras,
) -> Result<(), WorkflowError> {
    api.update_product(product_id, patch)
        .await
        .map_err(WorkflowError::Product)?;

    save_extras(api, product_id, extras)
        .await
        .map_err(|(step, source)| WorkflowError::Step {
            step,
            product_id,
            rolled_back: false,
            source,
        })
}

async fn save_extras(
    api: &ApiClient,
    product_id: ProductId,
    extras: &ProductExtras,
) -> Result<(), (WorkflowStep, ApiError)> {
    if let Some(price) = extras.price {
        api.create_product_price(&NewProductPrice { product_id, price })
            .await
            .map_err(|e| (WorkflowStep::Price, e))?;
    }

    for (step, image) in extras.image_steps() {
        let body = NewProductImage {
            product_id,
            image_url: image.url.to_string(),
            is_main: image.is_main,
        };
        api.create_product_image(&body)
            .await
            .map_err(|e| (step, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_steps_skip_blank_urls() {
        let extras = ProductExtras {
            price: None,
            main_image: Some("https://cdn/main.jpg".to_string()),
            extra_images: vec![
                "https://cdn/1.jpg".to_string(),
                "  ".to_string(),
                "https://cdn/3.jpg".to_string(),
            ],
        };
        let steps: Vec<(WorkflowStep, bool)> = extras
            .image_steps()
            .into_iter()
            .map(|(step, image)| (step, image.is_main))
            .collect();
        assert_eq!(
            steps,
            vec![
                (WorkflowStep::MainImage, true),
                (WorkflowStep::ExtraImage(0), false),
                (WorkflowStep::ExtraImage(2), false),
            ]
        );
    }

    #[test]
    fn test_blank_main_image_is_skipped() {
        let extras = ProductExtras {
            main_image: Some(String::new()),
            ..ProductExtras::default()
        };
        assert!(extras.image_steps().is_empty());
    }

    #[test]
    fn test_step_error_message() {
        let err = WorkflowError::Step {
            step: WorkflowStep::ExtraImage(1),
            product_id: ProductId::new(9),
            rolled_back: true,
            source: ApiError::Api {
                status: 500,
                message: "upload failed".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Failed to save extra image 2 for product 9: API error: 500 - upload failed"
        );
        assert_eq!(err.api_error().and_then(ApiError::status), Some(500));
    }
}
