//! Shop state store: the shopper's cart and wishlist.
//!
//! # Model
//!
//! - Two ordered collections keyed by product ID: cart lines (with a
//!   quantity) and wishlist entries (membership only)
//! - Totals are computed from the collections on every read, never cached
//! - Every mutation rewrites both snapshots to storage, even a no-op one
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use rust_decimal::Decimal;
//! use tailorzone_core::ProductSummary;
//! use tailorzone_storefront::shop::ShopStore;
//! use tailorzone_storefront::storage::MemoryStore;
//!
//! let mut shop = ShopStore::open(Arc::new(MemoryStore::new())).unwrap();
//! let suit = ProductSummary::new("t1", "Anarkali Suit", Decimal::from(2999), "/x.svg");
//!
//! shop.add_to_cart(&suit);
//! shop.update_quantity("t1", 3);
//! assert_eq!(shop.cart_count(), 3);
//! assert_eq!(shop.cart_total(), Decimal::from(8997));
//! ```

mod summary;

pub use summary::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, OrderSummary};

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tailorzone_core::{CartItem, ProductSummary, WishlistItem};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the cart snapshot.
pub const CART_KEY: &str = "cart";

/// Storage key holding the wishlist snapshot.
pub const WISHLIST_KEY: &str = "wishlist";

/// Errors from loading or saving shop snapshots.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A stored snapshot is not valid JSON for its collection.
    #[error("Corrupt {key} snapshot: {source}")]
    CorruptSnapshot {
        /// Storage key of the bad snapshot.
        key: &'static str,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized.
    #[error("Failed to serialize {key} snapshot: {source}")]
    Serialize {
        /// Storage key being written.
        key: &'static str,
        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// The shopper's cart and wishlist, persisted to a key-value store.
///
/// Mutations take `&mut self` and complete before returning. Share a
/// store between consumers through an explicit handle (see
/// [`crate::state::AppState`]), not a global.
pub struct ShopStore {
    storage: Arc<dyn KeyValueStore>,
    cart: Vec<CartItem>,
    wishlist: Vec<WishlistItem>,
}

impl fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopStore")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

impl ShopStore {
    /// Open a store, rehydrating both collections from `storage`.
    ///
    /// A missing snapshot starts that collection empty.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CorruptSnapshot`] if a stored snapshot does not
    /// parse, or [`ShopError::Storage`] if storage cannot be read.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, ShopError> {
        let cart: Vec<CartItem> = load_snapshot(storage.as_ref(), CART_KEY)?;
        let wishlist: Vec<WishlistItem> = load_snapshot(storage.as_ref(), WISHLIST_KEY)?;

        debug!(
            cart_lines = cart.len(),
            wishlist_items = wishlist.len(),
            "Shop state rehydrated"
        );

        Ok(Self {
            storage,
            cart,
            wishlist,
        })
    }

    /// Delete both snapshots from `storage`.
    ///
    /// Works without opening a store, so a corrupt snapshot can be cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn clear_snapshots(storage: &dyn KeyValueStore) -> Result<(), StorageError> {
        storage.remove(CART_KEY)?;
        storage.remove(WISHLIST_KEY)?;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// An existing line keeps the name, price and image it was first added
    /// with; only its quantity goes up.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn add_to_cart(&mut self, product: &ProductSummary) {
        if let Some(item) = self.cart.iter_mut().find(|item| item.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(quantity = item.quantity, "Incremented cart line");
        } else {
            self.cart.push(CartItem::single(product));
            debug!("Added cart line");
        }
        self.persist();
    }

    /// Remove the cart line for `id`. Absent IDs are ignored.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.retain(|item| item.id != id);
        self.persist();
    }

    /// Set the quantity of the cart line for `id`.
    ///
    /// Negative quantities count as zero, and a line at zero is removed.
    /// Absent IDs are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        if let Some(item) = self.cart.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        self.cart.retain(|item| item.quantity > 0);
        self.persist();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// The cart line for `id`, if any.
    #[must_use]
    pub fn cart_item(&self, id: &str) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.id == id)
    }

    /// Sum of `price × quantity` over all cart lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all cart lines.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Subtotal, shipping and grand total for the current cart.
    #[must_use]
    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.cart_total())
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Add `product` to the wishlist, or remove it if already there.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub fn toggle_wishlist(&mut self, product: &ProductSummary) -> bool {
        let before = self.wishlist.len();
        self.wishlist.retain(|item| item.id != product.id);

        let added = self.wishlist.len() == before;
        if added {
            self.wishlist.push(WishlistItem::from(product));
        }
        debug!(added, "Toggled wishlist entry");

        self.persist();
        added
    }

    /// Whether `id` is in the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.wishlist.iter().any(|item| item.id == id)
    }

    /// The wishlist entry for `id`, if any.
    #[must_use]
    pub fn wishlist_item(&self, id: &str) -> Option<&WishlistItem> {
        self.wishlist.iter().find(|item| item.id == id)
    }

    /// Wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[WishlistItem] {
        &self.wishlist
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write both snapshots to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if either snapshot cannot be serialized or written.
    pub fn save(&self) -> Result<(), ShopError> {
        save_snapshot(self.storage.as_ref(), CART_KEY, &self.cart)?;
        save_snapshot(self.storage.as_ref(), WISHLIST_KEY, &self.wishlist)?;
        Ok(())
    }

    /// Save after a mutation. Failures are logged; the in-memory state stays.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "Failed to persist shop state");
        }
    }
}

fn load_snapshot<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Vec<T>, ShopError> {
    match storage.get(key)? {
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|source| ShopError::CorruptSnapshot { key, source })
        }
        None => Ok(Vec::new()),
    }
}

fn save_snapshot<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &'static str,
    items: &[T],
) -> Result<(), ShopError> {
    let raw = serde_json::to_string(items).map_err(|source| ShopError::Serialize { key, source })?;
    storage.set(key, &raw)?;
    Ok(())
}
