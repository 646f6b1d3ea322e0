//! FluxTrade Core - Shared types library.
//!
//! This crate provides common types used across all FluxTrade components:
//! - `store` - Client-side state stores (catalog, cart, orders, auth)
//! - `cli` - Command-line shopping demo driving the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
