//! Shared HTTP plumbing for the REST API.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use url::Url;

use super::types::Validate;
use super::{ApiError, ErrorBody};
use crate::config::ApiConfig;

/// Back office REST API client.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve a resource path (`"products/3"`) against the base URL.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Resolve a path and append query pairs.
    fn url_with_query<K, V>(&self, path: &str, query: &[(K, V)]) -> Result<Url, ApiError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key.as_ref(), value.as_ref());
            }
        }
        Ok(url)
    }

    /// Execute a GET request and parse the validated body.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.url(path)?;
        self.send::<T, ()>(Method::GET, path, url, None).await
    }

    /// Execute a GET request with query parameters.
    pub(crate) async fn get_with_query<T, K, V>(
        &self,
        path: &str,
        query: &[(K, V)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.url_with_query(path, query)?;
        self.send::<T, ()>(Method::GET, path, url, None).await
    }

    /// Execute a POST request and parse the validated body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + Sync,
    {
        let url = self.url(path)?;
        self.send(Method::POST, path, url, Some(body)).await
    }

    /// Execute a PATCH request and parse the validated body.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + Sync,
    {
        let url = self.url(path)?;
        self.send(Method::PATCH, path, url, Some(body)).await
    }

    /// Execute a mutation whose response body is not needed.
    pub(crate) async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + Sync,
    {
        let url = self.url(path)?;
        let response = self.request(method, url, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::parse_error(path, response).await)
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, path, None).await
    }

    #[instrument(skip_all, fields(method = %method, url = %url))]
    async fn request<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + Sync,
    {
        let mut request = self.inner.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        debug!(status = response.status().as_u16(), "API response");
        Ok(response)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + Sync,
    {
        let response = self.request(method, url, body).await?;
        Self::handle_response(path, response).await
    }

    /// Handle API response: parse JSON, then validate.
    async fn handle_response<T>(path: &str, response: reqwest::Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
    {
        if !response.status().is_success() {
            return Err(Self::parse_error(path, response).await);
        }

        let bytes = response.bytes().await?;
        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Parse(format!("{path}: {e}")))?;
        value
            .validate()
            .map_err(|e| ApiError::Validation(format!("{path}: {e}")))?;
        Ok(value)
    }

    /// Turn an error response into an [`ApiError`].
    async fn parse_error(path: &str, response: reqwest::Response) -> ApiError {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return ApiError::NotFound(path.to_string());
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

        ApiError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: Url::parse(base).unwrap_or_else(|e| panic!("{e}")),
            timeout: Duration::from_secs(5),
        };
        ApiClient::new(&config).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_url_joins_relative_to_base_path() {
        let api = client("http://localhost:3002/api/");
        let url = api.url("/products/3").map(|u| u.to_string()).ok();
        assert_eq!(url.as_deref(), Some("http://localhost:3002/api/products/3"));
    }

    #[test]
    fn test_url_with_query_encodes_values() {
        let api = client("http://localhost:3002/");
        let url = api
            .url_with_query("products/search", &[("w", "blue shirt&co")])
            .map(|u| u.to_string())
            .ok();
        assert_eq!(
            url.as_deref(),
            Some("http://localhost:3002/products/search?w=blue+shirt%26co")
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let api = client("http://localhost:3002/");
        let empty: [(&str, &str); 0] = [];
        let url = api.url_with_query("orders", &empty).map(|u| u.to_string()).ok();
        assert_eq!(url.as_deref(), Some("http://localhost:3002/orders"));
    }

    #[test]
    fn test_debug_shows_base_url_only() {
        let api = client("http://localhost:3002/");
        assert!(format!("{api:?}").contains("localhost:3002"));
    }
}
