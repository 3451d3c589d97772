//! reqwest-backed catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::CatalogApi;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::filter::ProductFilter;
use crate::form::ProductPayload;
use crate::product::Product;

/// Body shape of a rejected request.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a client for the given base URL.
    ///
    /// A `timeout` of `None` lets requests wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::invalid_url(base_url, "expected an http or https URL"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// See [`HttpCatalog::new`].
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    /// The base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Turn a response into a value, or a rejection for non-2xx statuses.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = Self::check_status(response).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Read the body, mapping non-2xx statuses to [`Error::Rejected`].
    async fn check_status(response: Response) -> Result<String> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error);
            debug!(%status, ?message, "Catalog API rejected request");
            return Err(Error::rejected(status, message));
        }

        Ok(text)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        debug!(url = %self.base_url, ?filter, "Listing products");
        let response = self
            .client
            .get(&self.base_url)
            .query(&filter.query_pairs())
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let url = format!("{}/categories", self.base_url);
        debug!(%url, "Listing categories");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn get_product(&self, id: i64) -> Result<Product> {
        let url = self.item_url(id);
        debug!(%url, "Fetching product");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product> {
        debug!(url = %self.base_url, name = %payload.name, "Creating product");
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product> {
        let url = self.item_url(id);
        debug!(%url, "Updating product");
        let response = self.client.put(&url).json(payload).send().await?;
        Self::handle_response(response).await
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let url = self.item_url(id);
        debug!(%url, "Deleting product");
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = HttpCatalog::new("http://localhost:5000/api/clothing/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api/clothing");
        assert_eq!(client.item_url(7), "http://localhost:5000/api/clothing/7");
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let config = ApiConfig {
            base_url: "  http://localhost:5000/api/clothing/ \n".to_string(),
            ..ApiConfig::default()
        };
        let client = HttpCatalog::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api/clothing");
    }

    #[test]
    fn test_new_rejects_non_http() {
        let err = HttpCatalog::new("ftp://example.com/catalog", None).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig::default();
        let client = HttpCatalog::from_config(&config).unwrap();
        assert_eq!(client.base_url(), config.base_url);
    }

    #[test]
    fn test_error_body_parses_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Item not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Item not found"));
    }
}
