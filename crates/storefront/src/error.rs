//! Unified error handling.
//!
//! Provides a unified `AppError` type for everything a storefront front end
//! (the CLI today) can hit. Internals are logged; shoppers see the short
//! messages from [`AppError::user_message`].

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::shop::ShopError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog service operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart or wishlist snapshot could not be loaded or saved.
    #[error("Shop state error: {0}")]
    Shop(#[from] ShopError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the shopper.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to show a shopper.
    ///
    /// Server-side details are logged, not shown.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Catalog(CatalogError::NotFound(_)) | Self::NotFound(_) => {
                "Product not found.".to_string()
            }
            Self::Catalog(_) => "Failed to load products. Please try again later.".to_string(),
            Self::Shop(ShopError::CorruptSnapshot { key, .. }) => {
                format!("Your saved {key} could not be read. Clear it and try again.")
            }
            Self::Shop(_) | Self::Storage(_) | Self::Internal(_) => {
                "Something went wrong saving your cart.".to_string()
            }
            Self::Config(_) | Self::BadRequest(_) => self.to_string(),
        }
    }

    /// Log the error with full detail.
    pub fn log(&self) {
        match self {
            Self::NotFound(_) | Self::BadRequest(_) | Self::Catalog(CatalogError::NotFound(_)) => {
                tracing::warn!(error = %self, "Request failed");
            }
            _ => tracing::error!(error = %self, "Request failed"),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
