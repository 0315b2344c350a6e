//! Tailorzone Core - Shared types library.
//!
//! This crate provides the domain types used across all Tailorzone components:
//! - `storefront` - Shop state store, catalog client, search and pagination
//! - `cli` - Command-line storefront for browsing and managing the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, and cart/wishlist entries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
