//! Integration tests for Tailorzone.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tailorzone-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_client` - Catalog client against an in-process stub service
//! - `shop_persistence` - Cart and wishlist snapshots on disk
//!
//! No external services are needed; the stub binds to an ephemeral port.
