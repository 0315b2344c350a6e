//! Application state shared across storefront consumers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::shop::ShopStore;
use crate::storage::{FileStore, KeyValueStore};

/// Application state shared across all consumers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog client and the one shop store. Consumers receive it explicitly;
/// there is no global to look up.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    storage: Arc<dyn KeyValueStore>,
    shop: Mutex<ShopStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("catalog", &self.inner.catalog)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create application state backed by a [`FileStore`] in `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created, a stored
    /// snapshot is corrupt, or the catalog client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
        Self::with_storage(config, storage)
    }

    /// Create application state over an explicit storage backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored snapshot is corrupt or the catalog
    /// client cannot be built.
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let shop = ShopStore::open(Arc::clone(&storage))?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storage,
                shop: Mutex::new(shop),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the snapshot storage.
    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.inner.storage.as_ref()
    }

    /// Lock the shop store.
    ///
    /// Do not hold the guard across an `.await`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous holder panicked.
    pub fn shop(&self) -> Result<MutexGuard<'_, ShopStore>> {
        self.inner
            .shop
            .lock()
            .map_err(|_| AppError::Internal("shop store lock poisoned".to_string()))
    }
}
