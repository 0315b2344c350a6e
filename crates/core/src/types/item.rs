//! Cart and wishlist entries.
//!
//! Field names on the wire (`_id`, `img`) match the snapshot format the
//! browser storefront already writes, so existing snapshots rehydrate as-is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// The display fields of a product that the cart and wishlist copy in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in rupees.
    pub price: Decimal,
    /// Image URL or relative path.
    #[serde(rename = "img")]
    pub image_ref: String,
}

impl ProductSummary {
    /// Create a new product summary.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }
}

/// A line in the shopping cart.
///
/// `quantity` is at least 1 while the item is in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier (unique within a cart).
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name captured when the item was first added.
    pub name: String,
    /// Unit price captured when the item was first added.
    pub price: Decimal,
    /// Image URL or relative path.
    #[serde(rename = "img")]
    pub image_ref: String,
    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line for a single unit of a product.
    #[must_use]
    pub fn single(product: &ProductSummary) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_ref: product.image_ref.clone(),
            quantity: 1,
        }
    }

    /// Price of this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Unit price with currency, for display.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::inr(self.price)
    }
}

/// A saved-for-later product. Membership only, no quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Product identifier (unique within a wishlist).
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Image URL or relative path.
    #[serde(rename = "img")]
    pub image_ref: String,
}

impl From<&ProductSummary> for WishlistItem {
    fn from(product: &ProductSummary) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image_ref: product.image_ref.clone(),
        }
    }
}

impl From<&WishlistItem> for ProductSummary {
    fn from(item: &WishlistItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image_ref: item.image_ref.clone(),
        }
    }
}
