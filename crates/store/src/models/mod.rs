//! Domain models persisted by the stores.

pub mod order;
pub mod product;
pub mod session;

pub use order::{Order, OrderAddress, OrderEvent, OrderItem, PlaceOrderPayload};
pub use product::{Category, Product};
pub use session::AuthSession;
