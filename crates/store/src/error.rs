//! Unified error handling for the store crate.
//!
//! Fallible seams are narrow by design: constructing storage backends and
//! loading configuration can fail, while store mutations never do. A
//! mutation that cannot reach durable storage keeps its in-memory state and
//! logs the failure instead of surfacing it (see [`crate::storage`]).

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the store crate.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
