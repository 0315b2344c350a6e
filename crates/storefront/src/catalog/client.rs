//! Catalog service client implementation.
//!
//! Uses `reqwest` for HTTP and caches responses using `moka`.

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogConfig;

use super::cache::{CacheKey, CacheValue};
use super::conversions::{convert_product, convert_products};
use super::types::{Product, ProductListResponse, ProductResponse};
use super::{CatalogError, Result};

/// Maximum number of response body characters kept in errors and logs.
const BODY_SNIPPET_LEN: usize = 200;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog service.
///
/// Cheap to clone; clones share the HTTP connection pool and cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, or if the base
    /// URL cannot carry endpoint paths.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.to_string()));
        }

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.clone(),
                cache,
            }),
        })
    }

    /// Base URL without a trailing slash, used to resolve image paths.
    fn base_str(&self) -> &str {
        self.inner.base_url.as_str().trim_end_matches('/')
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode the JSON body.
    ///
    /// `404` maps to [`CatalogError::NotFound`] naming `resource`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        resource: &str,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(resource.to_string()));
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %snippet(&body),
                "Catalog service returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %snippet(&body),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get every product in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Products with an unusable
    /// price are skipped.
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        let cache_key = CacheKey::AllProducts;

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let url = self.endpoint(&["get-product"])?;
        let response: ProductListResponse = self
            .execute(self.inner.client.get(url), "product listing")
            .await?;
        let products = convert_products(response.into_products(), self.base_str());
        debug!(count = products.len(), "Fetched product listing");

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get the products in one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. Products with an unusable
    /// price are skipped.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn get_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let cache_key = CacheKey::Category(category.to_string());

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for category");
            return Ok(products);
        }

        let url = self.endpoint(&["product", "category"])?;
        let request = self
            .inner
            .client
            .post(url)
            .json(&json!({ "category": category }));
        let response: ProductListResponse = self
            .execute(request, &format!("category {category}"))
            .await?;
        let products = convert_products(response.into_products(), self.base_str());
        debug!(count = products.len(), "Fetched category");

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the service has no such
    /// product, [`CatalogError::InvalidPrice`] if its price is unusable,
    /// or another error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product> {
        let cache_key = CacheKey::Product(id.to_string());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let not_found = || format!("Product not found: {id}");

        let url = self.endpoint(&["product", id])?;
        let response: ProductResponse = self
            .execute(self.inner.client.get(url), &not_found())
            .await?;
        let raw = response
            .product
            .ok_or_else(|| CatalogError::NotFound(not_found()))?;
        let product = convert_product(raw, self.base_str())?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Drop every cached response.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }
}

/// First [`BODY_SNIPPET_LEN`] characters of a response body.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(&CatalogConfig::with_base_url(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client("http://localhost:5000");
        assert_eq!(
            client.endpoint(&["get-product"]).unwrap().as_str(),
            "http://localhost:5000/get-product"
        );
        assert_eq!(
            client.endpoint(&["product", "category"]).unwrap().as_str(),
            "http://localhost:5000/product/category"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://api.mytalorzone.in/v1/");
        assert_eq!(
            client.endpoint(&["product", "t1"]).unwrap().as_str(),
            "https://api.mytalorzone.in/v1/product/t1"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let client = client("http://localhost:5000");
        assert_eq!(
            client.endpoint(&["product", "a/b c"]).unwrap().as_str(),
            "http://localhost:5000/product/a%2Fb%20c"
        );
    }

    #[test]
    fn test_snippet_truncates() {
        let body = "x".repeat(500);
        assert_eq!(snippet(&body).len(), BODY_SNIPPET_LEN);
        assert_eq!(snippet("short"), "short");
    }
}
