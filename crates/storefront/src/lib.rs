//! Tailorzone Storefront library.
//!
//! Shopper-side state and catalog access for the Tailorzone apparel store:
//!
//! - [`shop`] - cart and wishlist with derived totals, persisted on every change
//! - [`storage`] - key-value backends the shop persists into
//! - [`catalog`] - client for the remote product catalog service
//! - [`search`] - case-insensitive product filter
//! - [`pagination`] - page arithmetic for product listings
//! - [`state`] - shared handle tying config, catalog and shop together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod pagination;
pub mod search;
pub mod shop;
pub mod state;
pub mod storage;
