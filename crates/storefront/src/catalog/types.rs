//! Catalog product types.
//!
//! [`Product`] is the normalized shape used throughout the crate. The
//! `Raw*` types mirror the service's JSON and stay private to the catalog
//! module.

use rust_decimal::Decimal;
use serde::Deserialize;
use tailorzone_core::{Price, ProductId, ProductSummary};

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product ID (`_id`).
    pub id: ProductId,
    /// Merchant-facing product code, when the service sends one.
    pub product_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Unit price in rupees.
    pub price: Decimal,
    /// Category label (e.g. "Traditional").
    pub category: String,
    /// Absolute image URL, or the placeholder path.
    pub image_url: String,
    /// Units in stock.
    pub in_stock: u32,
    /// Units sold.
    pub sold: u32,
    /// Average rating.
    pub rating: f64,
    /// Visibility flag as sent by the service.
    pub visibility: Option<String>,
    /// Long description.
    pub description: Option<String>,
}

impl Product {
    /// The display fields the cart and wishlist copy in.
    #[must_use]
    pub fn summary(&self) -> ProductSummary {
        ProductSummary::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.image_url.clone(),
        )
    }

    /// Unit price with currency, for display.
    #[must_use]
    pub const fn display_price(&self) -> Price {
        Price::inr(self.price)
    }

    /// Whether any units are in stock.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.in_stock > 0
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// A price as sent by the service: numeric string or JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawPrice {
    Text(String),
    Number(f64),
}

/// A product as sent by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProduct {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    pub name: String,
    pub price: RawPrice,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub in_stock_value: Option<u32>,
    #[serde(default)]
    pub sold_stock_value: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /get-product` and `POST /product/category` bodies.
///
/// The service normally wraps the list, but a bare array is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductListResponse {
    Wrapped { products: Vec<RawProduct> },
    Bare(Vec<RawProduct>),
}

impl ProductListResponse {
    pub fn into_products(self) -> Vec<RawProduct> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}

/// `GET /product/{id}` body.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductResponse {
    #[serde(default)]
    pub product: Option<RawProduct>,
}
