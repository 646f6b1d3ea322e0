//! Order records and the payload used to create them.
//!
//! An order is created atomically from the cart at placement time: item
//! snapshots and the monetary breakdown are frozen then, independent of any
//! later catalog change. Orders are never deleted, only appended-to via
//! status events. Wire shapes are camelCase JSON.

use chrono::{DateTime, NaiveDate, Utc};
use fluxtrade_core::{Money, OrderId, OrderStatus, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A timestamped status transition on an order's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Shipping address captured at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
    pub full_name: String,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub contact_number: String,
}

/// A product snapshot inside an order, frozen at placement time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    /// Unit price at placement time.
    pub price: Money,
    pub quantity: u32,
}

impl OrderItem {
    /// Unit price times quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Human-readable reference code (e.g. `FT-482913`).
    pub reference: String,
    pub placed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<NaiveDate>,
    /// Current status; always equals the status of the last event.
    pub status: OrderStatus,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    pub address: OrderAddress,
    pub items: Vec<OrderItem>,
    /// Append-only timeline, non-decreasing in timestamp.
    pub events: Vec<OrderEvent>,
}

impl Order {
    /// Whether a timeline step of the given status renders as complete.
    ///
    /// A step is complete when its rank is at or below the current status
    /// rank; `Cancelled` ranks zero, so cancellation never marks happy-path
    /// steps complete.
    #[must_use]
    pub const fn step_complete(&self, status: OrderStatus) -> bool {
        status.rank() <= self.status.rank()
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Caller-supplied input for order placement.
///
/// `shipping` defaults to zero; `tax` wins over `tax_rate`, and when both
/// are absent the store's flat rate applies. `note` seeds the first
/// "processing" event.
#[derive(Debug, Clone, Default)]
pub struct PlaceOrderPayload {
    pub items: Vec<OrderItem>,
    pub shipping: Option<Money>,
    pub tax_rate: Option<Decimal>,
    pub tax: Option<Money>,
    pub payment_method: String,
    pub address: OrderAddress,
    pub eta: Option<NaiveDate>,
    pub note: Option<String>,
    pub tracking_number: Option<String>,
}
