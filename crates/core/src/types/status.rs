//! Status and role enums.
//!
//! [`OrderStatus`] is the fulfillment state machine for placed orders, and
//! [`UserRole`] is the closed set of roles a session can carry. Both
//! serialize as `snake_case` strings, matching the persisted JSON shapes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known order status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid order status: {0}")]
pub struct ParseOrderStatusError(String);

/// Error returned when a string does not name a known user role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user role: {0}")]
pub struct ParseUserRoleError(String);

/// Order fulfillment status.
///
/// The five happy-path statuses form a total order (see [`rank`]) used by
/// the tracking timeline; `Cancelled` sits outside that progression.
///
/// [`rank`]: OrderStatus::rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Packed,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in timeline order with `Cancelled` last.
    pub const ALL: [Self; 6] = [
        Self::Processing,
        Self::Packed,
        Self::Shipped,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Position of this status on the fulfillment timeline.
    ///
    /// A timeline event renders as complete when its status rank is less
    /// than or equal to the order's current status rank. `Cancelled` ranks
    /// zero so it never marks happy-path steps complete.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            Self::Processing => 1,
            Self::Packed => 2,
            Self::Shipped => 3,
            Self::OutForDelivery => 4,
            Self::Delivered => 5,
        }
    }

    /// Whether this status ends the order's lifecycle.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether the order is currently moving through the carrier network.
    #[must_use]
    pub const fn is_in_transit(&self) -> bool {
        matches!(self, Self::Shipped | Self::OutForDelivery)
    }

    /// Whether the order is still being prepared for handoff.
    #[must_use]
    pub const fn is_awaiting_shipment(&self) -> bool {
        matches!(self, Self::Processing | Self::Packed)
    }

    /// Human-readable label for badges and timelines.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Packed => "Packed",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Processing => "processing",
            Self::Packed => "packed",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "packed" => Ok(Self::Packed),
            "shipped" => Ok(Self::Shipped),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError(s.to_string())),
        }
    }
}

/// Session role with different storefront surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Shop, track orders, manage wishlists.
    #[default]
    User,
    /// Monitor analytics and oversee sellers.
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = ParseUserRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseUserRoleError(s.to_string())),
        }
    }
}
