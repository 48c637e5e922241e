//! CMS page and banner operations (`/cms`, `/cms/banners`).

use backoffice_core::{BannerId, CmsPageId};
use reqwest::Method;
use tracing::instrument;

use super::types::{Banner, BannerInput, CmsPage, CmsPageInput};
use super::{ApiClient, ApiError};

impl ApiClient {
    // =========================================================================
    // Pages
    // =========================================================================

    /// List every CMS page.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_cms_pages(&self) -> Result<Vec<CmsPage>, ApiError> {
        self.get("cms").await
    }

    /// Create a CMS page.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn create_cms_page(&self, input: &CmsPageInput) -> Result<(), ApiError> {
        self.execute(Method::POST, "cms", Some(input)).await
    }

    /// Partially update a CMS page.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(page_id = %id))]
    pub async fn update_cms_page(&self, id: CmsPageId, input: &CmsPageInput) -> Result<(), ApiError> {
        self.execute(Method::PATCH, &format!("cms/{id}"), Some(input))
            .await
    }

    /// Delete a CMS page.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(page_id = %id))]
    pub async fn delete_cms_page(&self, id: CmsPageId) -> Result<(), ApiError> {
        self.delete(&format!("cms/{id}")).await
    }

    // =========================================================================
    // Banners
    // =========================================================================

    /// List every home page banner.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_banners(&self) -> Result<Vec<Banner>, ApiError> {
        self.get("cms/banners").await
    }

    /// Create a banner.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input))]
    pub async fn create_banner(&self, input: &BannerInput) -> Result<(), ApiError> {
        self.execute(Method::POST, "cms/banners", Some(input)).await
    }

    /// Partially update a banner.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self, input), fields(banner_id = %id))]
    pub async fn update_banner(&self, id: BannerId, input: &BannerInput) -> Result<(), ApiError> {
        self.execute(Method::PATCH, &format!("cms/banners/{id}"), Some(input))
            .await
    }

    /// Delete a banner.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(banner_id = %id))]
    pub async fn delete_banner(&self, id: BannerId) -> Result<(), ApiError> {
        self.delete(&format!("cms/banners/{id}")).await
    }
}
