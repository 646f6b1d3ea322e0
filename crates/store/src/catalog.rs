//! Static product catalog.
//!
//! Ten seed products are expanded into up to one hundred by composing each
//! with a variant label ("Prime", "Series 2", ...). Variant ids are derived
//! arithmetically from the base id, so [`Catalog::get`] can compute any
//! product on demand without searching the expanded list. The catalog is
//! immutable after load and lookups never fail with an error; an unmapped
//! id is simply `None`.

use std::sync::LazyLock;

use fluxtrade_core::{Money, ProductId};
use rust_decimal::{Decimal, dec};

use crate::models::{Category, Product};

/// Variant labels appended to base product names, one per generation pass.
const VARIANT_LABELS: [&str; 10] = [
    "Prime",
    "Series 2",
    "Series 3",
    "Series 4",
    "Series 5",
    "Series 6",
    "Series 7",
    "Series 8",
    "Series 9",
    "Series 10",
];

/// Price increase per variant pass, in whole currency units.
const VARIANT_PRICE_STEP: i64 = 12;

/// Review-count decrease per variant pass, floored at 12.
const VARIANT_REVIEW_STEP: u32 = 11;

fn base(
    id: u32,
    name: &str,
    price: i64,
    original_price: i64,
    image: &str,
    rating: Decimal,
    reviews: u32,
    category: Category,
    description: &str,
    is_new: bool,
    is_trending: bool,
    tags: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::from_units(price),
        original_price: Some(Money::from_units(original_price)),
        image: image.to_string(),
        rating,
        reviews,
        category,
        description: Some(description.to_string()),
        in_stock: true,
        is_new,
        is_trending,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// The ten seed products every variant is composed from.
static BASE_PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        base(
            1,
            "Vertex Pro 15",
            1899,
            2199,
            "https://via.placeholder.com/560x420/312E81/FFFFFF?text=Vertex+Pro+15",
            dec!(4.8),
            264,
            Category::Electronics,
            "Flagship productivity laptop with carbon chassis, 4K display, and studio-grade speakers.",
            false,
            true,
            &["laptop", "workstation", "performance"],
        ),
        base(
            2,
            "AuraSync Noise Cancelling Headphones",
            329,
            399,
            "https://via.placeholder.com/560x420/4C1D95/FFFFFF?text=AuraSync+Headphones",
            dec!(4.7),
            188,
            Category::Electronics,
            "Immersive audio with adaptive ANC, 45-hour battery life, and multi-device pairing.",
            true,
            false,
            &["audio", "wireless", "travel"],
        ),
        base(
            3,
            "Nordic Atlas Chrono",
            479,
            549,
            "https://via.placeholder.com/560x420/1F2937/FFFFFF?text=Nordic+Atlas+Chrono",
            dec!(4.9),
            92,
            Category::Accessories,
            "Swiss movement, sapphire crystal, and interchangeable leather strap in a minimal profile.",
            false,
            true,
            &["watch", "premium", "minimal"],
        ),
        base(
            4,
            "Flux Knit Sneakers",
            168,
            210,
            "https://via.placeholder.com/560x420/047857/FFFFFF?text=Flux+Knit+Sneakers",
            dec!(4.6),
            341,
            Category::Footwear,
            "Lightweight knit upper with adaptive cushioning engineered for day-to-night comfort.",
            false,
            false,
            &["sneakers", "lifestyle", "comfort"],
        ),
        base(
            5,
            "PulseRunner Elite",
            198,
            249,
            "https://via.placeholder.com/560x420/0EA5E9/FFFFFF?text=PulseRunner+Elite",
            dec!(4.7),
            226,
            Category::Footwear,
            "Responsive running shoe with carbon-infused plate and breathable micro-mesh upper.",
            true,
            false,
            &["running", "training", "performance"],
        ),
        base(
            6,
            "Halo Home Smart Speaker",
            189,
            229,
            "https://via.placeholder.com/560x420/7C3AED/FFFFFF?text=Halo+Smart+Speaker",
            dec!(4.5),
            176,
            Category::SmartHome,
            "Spatial audio, adaptive lighting ambience, and cross-platform voice assistant integration.",
            true,
            false,
            &["smart home", "speaker", "automation"],
        ),
        base(
            7,
            "Glide Wireless Trackpad",
            129,
            149,
            "https://via.placeholder.com/560x420/4338CA/FFFFFF?text=Glide+Wireless+Trackpad",
            dec!(4.4),
            138,
            Category::Electronics,
            "Precision glass surface with multi-gesture support and 90-day battery life.",
            false,
            false,
            &["peripheral", "office", "wireless"],
        ),
        base(
            8,
            "Voyager Modular Backpack",
            248,
            289,
            "https://via.placeholder.com/560x420/1E293B/FFFFFF?text=Voyager+Backpack",
            dec!(4.8),
            158,
            Category::Accessories,
            "Water-resistant recycled nylon with magnetic quick-access panels and tech sleeves.",
            false,
            false,
            &["travel", "bag", "organization"],
        ),
        base(
            9,
            "ClimaCore Smart Thermostat",
            259,
            299,
            "https://via.placeholder.com/560x420/0F172A/FFFFFF?text=ClimaCore+Thermostat",
            dec!(4.6),
            201,
            Category::SmartHome,
            "Energy-optimizing climate control with adaptive schedules and presence detection.",
            false,
            true,
            &["climate", "automation", "energy"],
        ),
        base(
            10,
            "Lumen Micro Projector",
            429,
            499,
            "https://via.placeholder.com/560x420/1E1B4B/FFFFFF?text=Lumen+Micro+Projector",
            dec!(4.5),
            117,
            Category::Electronics,
            "Ultra-portable 4K projector with auto-keystone, autofocus, and 6-hour battery runtime.",
            false,
            true,
            &["projector", "4k", "portable"],
        ),
    ]
});

/// Compose the variant of `product` for the given generation pass.
fn compose_variant(product: &Product, variant_index: usize, product_index: usize) -> Product {
    let base_count = BASE_PRODUCTS.len() as u32;
    let variant_offset = u32::try_from(variant_index).unwrap_or(0);
    let label = VARIANT_LABELS.get(variant_index).copied().unwrap_or_default();

    let price_delta = Money::from_units(VARIANT_PRICE_STEP * variant_index as i64);
    let rating = (product.rating - dec!(0.05) * Decimal::from(variant_offset))
        .round_dp(1)
        .min(dec!(5));

    let is_new = if variant_index == 0 {
        product.is_new
    } else {
        variant_index >= VARIANT_LABELS.len() - 2 || product.is_new
    };
    let is_trending = if variant_index % 2 == 0 {
        product.is_trending
    } else {
        product_index % 3 == 0
    };

    let mut tags = product.tags.clone();
    tags.push(format!("collection-{}", variant_index + 1));

    Product {
        id: ProductId::new(variant_offset * base_count + product.id.as_u32()),
        name: format!("{} {label}", product.name),
        price: product.price + price_delta,
        original_price: product
            .original_price
            .map(|original| original + price_delta + Money::from_units(10)),
        rating,
        reviews: product
            .reviews
            .saturating_sub(VARIANT_REVIEW_STEP * variant_offset)
            .max(12),
        is_new,
        is_trending,
        tags,
        ..product.clone()
    }
}

/// The expanded product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Catalog size cap applied by [`Catalog::new`].
    pub const DEFAULT_LIMIT: usize = 100;

    /// Build the default hundred-product catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Build a catalog capped at `limit` products.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let mut products = Vec::with_capacity(limit.min(VARIANT_LABELS.len() * BASE_PRODUCTS.len()));
        'outer: for variant_index in 0..VARIANT_LABELS.len() {
            for (product_index, product) in BASE_PRODUCTS.iter().enumerate() {
                if products.len() >= limit {
                    break 'outer;
                }
                products.push(compose_variant(product, variant_index, product_index));
            }
        }
        Self { products }
    }

    /// The full catalog in stable order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    ///
    /// Variant products are computed from their base on demand, so ids past
    /// the listing cap still resolve as long as they map to a valid variant.
    /// Out-of-range or unmapped ids return `None`.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        let raw = id.as_u32();
        if raw < 1 {
            return None;
        }

        let base_count = BASE_PRODUCTS.len() as u32;
        let variant_index = ((raw - 1) / base_count) as usize;
        if variant_index >= VARIANT_LABELS.len() {
            return None;
        }

        let base_index = ((raw - 1) % base_count) as usize;
        BASE_PRODUCTS
            .get(base_index)
            .map(|product| compose_variant(product, variant_index, base_index))
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
