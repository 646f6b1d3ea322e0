//! Durable string-keyed storage.
//!
//! The external boundary of the whole system is a key-value store addressed
//! by four fixed keys (see [`keys`]). Every value is a whole JSON document;
//! saves overwrite the key and there is no cross-key atomicity. Reads are
//! tolerant by contract: a missing key yields the caller's default, and
//! malformed content is logged and defaulted, never surfaced as an error.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Fixed storage keys for the four persisted state slices.
pub mod keys {
    /// Raw cart contents: a flat JSON array of product ids, one entry per
    /// unit added.
    pub const CART: &str = "shop_cart_ids";
    /// Favorited product ids as a JSON array.
    pub const FAVORITES: &str = "shop_favorites_ids";
    /// Order history as a JSON array of order records, most recent first.
    pub const ORDERS: &str = "shop_orders";
    /// Auth session record.
    pub const AUTH: &str = "auth";
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage i/o failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a value for persistence failed.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A durable string-keyed store holding one JSON document per key.
pub trait KeyValueStore {
    /// Load the raw document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read. A key
    /// that has never been written is `Ok(None)`, not an error.
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn save_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the document stored under `key`. Missing keys are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a storage backend.
///
/// The auth and shop stores share one backend; `Arc` keeps the handle
/// cheaply cloneable. Execution is single-threaded (one mutation runs to
/// completion before the next begins), so no locking discipline is layered
/// on top.
pub type SharedStorage = std::sync::Arc<dyn KeyValueStore + Send + Sync>;

/// Load and parse the JSON document under `key`.
///
/// Returns `None` when the key is missing, the backend fails, or the stored
/// content is not valid JSON. Failures are logged, never propagated: a
/// corrupt document must degrade to the caller's default shape.
#[must_use]
pub fn load_json(storage: &dyn KeyValueStore, key: &str) -> Option<Value> {
    let raw = match storage.load_raw(key) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to read stored data");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to parse stored data, using default");
            None
        }
    }
}

/// Serialize `value` and overwrite the document under `key`.
///
/// # Errors
///
/// Returns `StorageError` if serialization or the backend write fails.
pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.save_raw(key, &raw)
}
