//! Product records.
//!
//! Products are static seed data owned by the catalog; nothing mutates them
//! after load. Field names serialize as camelCase to match the persisted
//! order-item snapshots that reference them.

use fluxtrade_core::{Money, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Accessories,
    Footwear,
    SmartHome,
}

impl Category {
    /// Human-readable label for filters and headings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
            Self::Footwear => "Footwear",
            Self::SmartHome => "Smart Home",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Electronics => write!(f, "electronics"),
            Self::Accessories => write!(f, "accessories"),
            Self::Footwear => write!(f, "footwear"),
            Self::SmartHome => write!(f, "smart-home"),
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    pub image: String,
    /// Average review rating, 0 to 5.
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    /// Review count.
    pub reviews: u32,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_trending: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Discount against the original price, if one is advertised.
    #[must_use]
    pub fn discount(&self) -> Option<Money> {
        self.original_price.map(|original| original - self.price)
    }
}
