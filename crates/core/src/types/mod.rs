//! Core types for Tailorzone.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod price;

pub use id::ProductId;
pub use item::{CartItem, ProductSummary, WishlistItem};
pub use price::{Price, PriceError};
