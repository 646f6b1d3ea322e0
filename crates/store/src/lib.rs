//! FluxTrade Store - Client-side state stores.
//!
//! This crate holds the storefront's entire "backend": a durable string-keyed
//! storage layer and the in-memory stores mirrored onto it. There is no
//! server, no database, and no network protocol; a view layer (the CLI, or
//! any other frontend) owns the stores and subscribes to their change
//! notifications.
//!
//! # Modules
//!
//! - [`storage`] - Durable key-value store (file-backed and in-memory)
//! - [`catalog`] - Static product catalog with variant generation
//! - [`auth`] - Auth session store (anonymous / authenticated)
//! - [`shop`] - Cart, favorites, and order store with derived cart views
//! - [`subscribe`] - Change notification for view layers
//! - [`config`] - Environment-driven configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fluxtrade_core::ProductId;
//! use fluxtrade_store::catalog::Catalog;
//! use fluxtrade_store::shop::ShopStore;
//! use fluxtrade_store::storage::MemoryStore;
//!
//! let storage = Arc::new(MemoryStore::new());
//! let catalog = Catalog::new();
//! let mut shop = ShopStore::new(storage, &catalog);
//!
//! shop.add_to_cart(ProductId::new(1));
//! shop.add_to_cart(ProductId::new(1));
//! let view = shop.cart_view(&catalog);
//! assert_eq!(view.lines[0].quantity, 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod shop;
pub mod storage;
pub mod subscribe;

pub use auth::AuthStore;
pub use catalog::Catalog;
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use shop::{CartLine, CartView, ShopStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStorage};
pub use subscribe::ChangeKind;
