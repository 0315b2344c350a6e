//! Client for the remote product catalog service.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP via `reqwest`
//! - The catalog service is the source of truth - no local sync
//! - In-memory caching via `moka` for responses (5 minute TTL by default)
//! - Prices and image references are normalized here, at the boundary, so
//!   the rest of the crate only ever sees [`Product`] with a `Decimal` price
//!
//! # Endpoints
//!
//! - `GET /get-product` - full listing
//! - `POST /product/category` with `{ "category": ... }` - one category
//! - `GET /product/{id}` - a single product
//!
//! # Example
//!
//! ```rust,ignore
//! use tailorzone_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let products = client.get_all_products().await?;
//! shop.add_to_cart(&products[0].summary());
//! ```

mod cache;
mod client;
mod conversions;
pub mod types;

pub use client::CatalogClient;
pub use conversions::image_url;
pub use types::Product;

use tailorzone_core::PriceError;
use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status {
        /// Response status.
        status: reqwest::StatusCode,
        /// Start of the response body.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A product's price is not a usable amount.
    #[error("Invalid price {value:?} for product {id}: {source}")]
    InvalidPrice {
        /// Product the price belongs to.
        id: String,
        /// Price as received.
        value: String,
        /// Why it was rejected.
        #[source]
        source: PriceError,
    },

    /// The configured base URL cannot have endpoint paths appended.
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
