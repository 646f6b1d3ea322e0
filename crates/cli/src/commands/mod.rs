//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod wishlist;

use std::sync::Arc;

use fluxtrade_store::catalog::Catalog;
use fluxtrade_store::storage::FileStore;
use fluxtrade_store::{AuthStore, ShopStore, StoreConfig, StoreError};

/// Stores and catalog shared by every command.
pub struct Context {
    pub catalog: Catalog,
    pub shop: ShopStore,
    pub auth: AuthStore,
}

impl Context {
    /// Build the context from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if configuration is invalid or the data
    /// directory cannot be created.
    pub fn from_env() -> Result<Self, StoreError> {
        let config = StoreConfig::from_env()?;
        let storage = Arc::new(FileStore::open(&config.data_dir)?);
        let catalog = Catalog::new();
        let shop = ShopStore::with_tax_rate(
            Arc::clone(&storage) as _,
            &catalog,
            config.tax_rate,
        );
        let auth = AuthStore::new(storage);

        Ok(Self {
            catalog,
            shop,
            auth,
        })
    }
}
