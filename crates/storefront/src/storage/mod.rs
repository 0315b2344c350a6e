//! Durable key-value storage for shop snapshots.
//!
//! The shop state store writes one string slot per collection (`cart`,
//! `wishlist`). Any backend that can get, set and remove strings by key
//! works; two are provided:
//!
//! - [`MemoryStore`] - process-local, for tests and throwaway sessions
//! - [`FileStore`] - one JSON file per key under a data directory
//!
//! All operations are synchronous and blocking.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters that cannot be used as a slot name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A lock around in-memory state was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A string-keyed slot store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Check that a key is usable as a slot name on every backend.
///
/// Keys are limited to ASCII alphanumerics, `-` and `_`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_slot_names() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("wishlist").is_ok());
        assert!(validate_key("guest-cart_2").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_paths() {
        assert!(matches!(
            validate_key("../cart"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("cart.json").is_err());
    }
}
