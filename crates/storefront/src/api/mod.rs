//! Catalog API access.
//!
//! [`CatalogApi`] is the seam between the browser/admin controllers and the
//! REST backend. [`HttpCatalog`] talks to a real server over HTTP; tests use
//! an in-memory implementation.

mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::Result;
use crate::filter::ProductFilter;
use crate::form::ProductPayload;
use crate::product::Product;

pub use http::HttpCatalog;

/// Operations offered by the catalog REST API.
///
/// Every call maps to exactly one request. Implementations must return
/// [`Error::Rejected`](crate::Error::Rejected) for non-2xx answers so callers
/// can surface the server's message.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET {base}?category=&size=&color=`
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// `GET {base}/categories`
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// `GET {base}/{id}`
    async fn get_product(&self, id: i64) -> Result<Product>;

    /// `POST {base}`
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product>;

    /// `PUT {base}/{id}`
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product>;

    /// `DELETE {base}/{id}`
    async fn delete_product(&self, id: i64) -> Result<()>;
}
