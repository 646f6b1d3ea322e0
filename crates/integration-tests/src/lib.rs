//! Integration tests for FluxTrade.
//!
//! Tests in this crate exercise whole shopping flows across the store crate:
//! a file-backed data directory, the catalog, and both stores together, the
//! way the CLI (or any other view layer) drives them.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fluxtrade-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use fluxtrade_store::catalog::Catalog;
use fluxtrade_store::storage::{FileStore, SharedStorage};
use fluxtrade_store::{AuthStore, ShopStore};
use tempfile::TempDir;

/// A profile directory with stores over it, mimicking one browser profile.
pub struct TestProfile {
    /// Kept alive so the directory survives for the test's duration.
    pub dir: TempDir,
    pub catalog: Catalog,
}

impl TestProfile {
    /// Create a fresh profile with an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        Self {
            dir,
            catalog: Catalog::new(),
        }
    }

    /// Open the profile's storage backend.
    ///
    /// # Panics
    ///
    /// Panics if the data directory cannot be opened.
    #[must_use]
    pub fn storage(&self) -> SharedStorage {
        Arc::new(FileStore::open(self.dir.path()).expect("failed to open file store"))
    }

    /// Build a shop store over this profile, as a fresh process would.
    #[must_use]
    pub fn shop(&self) -> ShopStore {
        ShopStore::new(self.storage(), &self.catalog)
    }

    /// Build an auth store over this profile, as a fresh process would.
    #[must_use]
    pub fn auth(&self) -> AuthStore {
        AuthStore::new(self.storage())
    }
}

impl Default for TestProfile {
    fn default() -> Self {
        Self::new()
    }
}
