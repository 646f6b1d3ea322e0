//! Cart, favorites, and order store.
//!
//! Three slices of state live here: the raw cart (a flat list of product
//! ids, one entry per unit added), the favorites set, and the order
//! history. Each slice is mirrored to its own storage key after every
//! mutation; reads are always served from memory. The grouped cart view is
//! derived on demand by a pure function over the raw id list rather than
//! maintained as a second mutable structure, so the two can never drift.

use chrono::{DateTime, NaiveDate, Utc};
use fluxtrade_core::{Money, OrderId, OrderStatus, ProductId};
use rand::Rng;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::DEFAULT_TAX_RATE;
use crate::models::{Order, OrderAddress, OrderEvent, OrderItem, PlaceOrderPayload, Product};
use crate::storage::{self, KeyValueStore, SharedStorage, keys};
use crate::subscribe::{ChangeKind, Subscribers, Subscription};

/// A grouped cart line: a product with its unit count.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    /// Snapshot this line as an order item.
    #[must_use]
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            product_id: self.product.id,
            name: self.product.name.clone(),
            image: self.product.image.clone(),
            price: self.product.price,
            quantity: self.quantity,
        }
    }
}

/// Derived view over the raw cart id list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView {
    /// Grouped lines in first-occurrence order.
    pub lines: Vec<CartLine>,
    /// Sum of line totals, rounded to two decimals.
    pub subtotal: Money,
    /// Total unit count across all lines.
    pub item_count: u32,
}

impl CartView {
    /// Group a raw id list into lines.
    ///
    /// Quantity for a product equals the count of its id in the raw list.
    /// Ids that no longer resolve in the catalog are skipped.
    #[must_use]
    pub fn from_ids(ids: &[ProductId], catalog: &Catalog) -> Self {
        let mut lines: Vec<CartLine> = Vec::new();
        for id in ids {
            if let Some(line) = lines.iter_mut().find(|line| line.product.id == *id) {
                line.quantity += 1;
            } else if let Some(product) = catalog.get(*id) {
                lines.push(CartLine {
                    product,
                    quantity: 1,
                });
            }
        }

        let mut subtotal = Money::ZERO;
        let mut item_count = 0;
        for line in &lines {
            subtotal += line.line_total();
            item_count += line.quantity;
        }

        Self {
            lines,
            subtotal: subtotal.rounded(),
            item_count,
        }
    }

    /// Whether the cart has no resolvable lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Counts of orders by fulfillment stage, for dashboard headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrdersSummary {
    pub total: usize,
    /// Shipped or out for delivery.
    pub in_transit: usize,
    /// Processing or packed.
    pub awaiting_shipment: usize,
    pub delivered: usize,
}

/// Owned cart/favorites/orders state mirrored onto durable storage.
pub struct ShopStore {
    storage: SharedStorage,
    cart_ids: Vec<ProductId>,
    favorites: Vec<ProductId>,
    orders: Vec<Order>,
    default_tax_rate: Decimal,
    subscribers: Subscribers,
}

impl ShopStore {
    /// Create the store, rehydrating persisted state.
    ///
    /// When the persisted order history is empty the store seeds it with
    /// sample orders built from `catalog`, so a fresh profile still has a
    /// populated tracking screen.
    #[must_use]
    pub fn new(storage: SharedStorage, catalog: &Catalog) -> Self {
        Self::with_tax_rate(storage, catalog, DEFAULT_TAX_RATE)
    }

    /// Create the store with an explicit default tax rate.
    #[must_use]
    pub fn with_tax_rate(storage: SharedStorage, catalog: &Catalog, tax_rate: Decimal) -> Self {
        let cart_ids = load_stored_ids(storage.as_ref(), keys::CART);
        let favorites = load_stored_ids(storage.as_ref(), keys::FAVORITES);
        let mut orders = load_stored_orders(storage.as_ref(), keys::ORDERS);
        if orders.is_empty() {
            orders = sample_orders(catalog);
        }

        let store = Self {
            storage,
            cart_ids,
            favorites,
            orders,
            default_tax_rate: tax_rate,
            subscribers: Subscribers::default(),
        };
        store.persist_orders();
        store
    }

    /// The raw cart id list, one entry per unit added.
    #[must_use]
    pub fn cart_ids(&self) -> &[ProductId] {
        &self.cart_ids
    }

    /// Favorited product ids in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    /// Order history, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Find an order by id.
    #[must_use]
    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == *order_id)
    }

    /// Whether a product is favorited.
    #[must_use]
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.contains(&product_id)
    }

    /// The grouped cart view, derived from the raw id list.
    #[must_use]
    pub fn cart_view(&self, catalog: &Catalog) -> CartView {
        CartView::from_ids(&self.cart_ids, catalog)
    }

    /// Append one unit of a product to the cart.
    ///
    /// No stock check is performed; callers that care consult
    /// `Product::in_stock` first.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.cart_ids.push(product_id);
        tracing::debug!(%product_id, "added to cart");
        self.persist_cart();
        self.subscribers.notify(ChangeKind::Cart);
    }

    /// Remove one occurrence of a product from the cart (first match).
    /// No-op if the product is absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let Some(position) = self.cart_ids.iter().position(|id| *id == product_id) else {
            return;
        };
        self.cart_ids.remove(position);
        tracing::debug!(%product_id, "removed one from cart");
        self.persist_cart();
        self.subscribers.notify(ChangeKind::Cart);
    }

    /// Remove every occurrence of a product from the cart.
    pub fn remove_all_from_cart(&mut self, product_id: ProductId) {
        let before = self.cart_ids.len();
        self.cart_ids.retain(|id| *id != product_id);
        if self.cart_ids.len() == before {
            return;
        }
        tracing::debug!(%product_id, "removed all from cart");
        self.persist_cart();
        self.subscribers.notify(ChangeKind::Cart);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart_ids.clear();
        self.persist_cart();
        self.subscribers.notify(ChangeKind::Cart);
    }

    /// Add a product to favorites if absent, remove it if present.
    pub fn toggle_favorite(&mut self, product_id: ProductId) {
        if let Some(position) = self.favorites.iter().position(|id| *id == product_id) {
            self.favorites.remove(position);
        } else {
            self.favorites.push(product_id);
        }
        self.persist_favorites();
        self.subscribers.notify(ChangeKind::Favorites);
    }

    /// Place an order from the supplied payload.
    ///
    /// Returns `None` without touching any state when the item list is
    /// empty. Otherwise the monetary breakdown is computed and frozen, the
    /// order is prepended to the history with a single "processing" event,
    /// and the cart is cleared.
    pub fn place_order(&mut self, payload: PlaceOrderPayload) -> Option<Order> {
        if payload.items.is_empty() {
            return None;
        }

        let now = Utc::now();
        let subtotal = payload
            .items
            .iter()
            .fold(Money::ZERO, |sum, item| sum + item.line_total())
            .rounded();
        let shipping = payload.shipping.unwrap_or(Money::ZERO);
        let tax_rate = payload.tax_rate.unwrap_or(self.default_tax_rate);
        let tax = payload.tax.unwrap_or_else(|| (subtotal * tax_rate).rounded());
        let total = (subtotal + shipping + tax).rounded();

        let reference = self.generate_reference();
        let order = Order {
            id: OrderId::new(format!("ord-{}", Uuid::new_v4().simple())),
            reference: reference.clone(),
            placed_at: now,
            eta: payload.eta,
            status: OrderStatus::Processing,
            subtotal,
            shipping,
            tax,
            total,
            payment_method: payload.payment_method,
            tracking_number: payload.tracking_number,
            address: payload.address,
            items: payload.items,
            events: vec![OrderEvent {
                status: OrderStatus::Processing,
                timestamp: now,
                note: Some(payload.note.unwrap_or_else(|| "Order received".to_string())),
            }],
        };
        tracing::info!(reference, total = %total, "order placed");

        self.orders.insert(0, order.clone());
        self.persist_orders();
        self.subscribers.notify(ChangeKind::Orders);

        // Placement consumes the cart unconditionally
        self.clear_cart();

        Some(order)
    }

    /// Append a status event to an order and set its current status.
    ///
    /// Any transition is accepted; a regression below the current rank, or
    /// an update past a terminal status, is logged but not rejected.
    /// Returns `false` if no order matches.
    pub fn update_order_status(
        &mut self,
        order_id: &OrderId,
        status: OrderStatus,
        note: Option<String>,
    ) -> bool {
        let Some(order) = self.orders.iter_mut().find(|order| order.id == *order_id) else {
            return false;
        };

        if order.status.is_terminal() || status.rank() < order.status.rank() {
            tracing::warn!(
                %order_id,
                from = %order.status,
                to = %status,
                "irregular status transition"
            );
        }

        order.events.push(OrderEvent {
            status,
            timestamp: Utc::now(),
            note,
        });
        order.status = status;
        tracing::info!(%order_id, %status, "order status updated");

        self.persist_orders();
        self.subscribers.notify(ChangeKind::Orders);
        true
    }

    /// Counts of orders by fulfillment stage.
    #[must_use]
    pub fn orders_summary(&self) -> OrdersSummary {
        let mut summary = OrdersSummary {
            total: self.orders.len(),
            ..OrdersSummary::default()
        };
        for order in &self.orders {
            if order.status.is_in_transit() {
                summary.in_transit += 1;
            } else if order.status.is_awaiting_shipment() {
                summary.awaiting_shipment += 1;
            } else if order.status == OrderStatus::Delivered {
                summary.delivered += 1;
            }
        }
        summary
    }

    /// Orders currently in the given status, most recent first.
    #[must_use]
    pub fn orders_with_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .collect()
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeKind) + 'static) -> Subscription {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.unsubscribe(subscription);
    }

    /// Generate a reference code unique within the current history.
    ///
    /// Random six-digit suffix, retried while it collides with an existing
    /// order's reference.
    fn generate_reference(&self) -> String {
        let mut rng = rand::rng();
        loop {
            let reference = format!("FT-{}", rng.random_range(100_000..=999_999));
            if !self.orders.iter().any(|order| order.reference == reference) {
                return reference;
            }
        }
    }

    fn persist_cart(&self) {
        self.persist(keys::CART, &self.cart_ids);
    }

    fn persist_favorites(&self) {
        self.persist(keys::FAVORITES, &self.favorites);
    }

    fn persist_orders(&self) {
        self.persist(keys::ORDERS, &self.orders);
    }

    /// Mirror one slice to its storage key. A failed write keeps the
    /// in-memory state authoritative and is only logged.
    fn persist<T: serde::Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = storage::save_json(self.storage.as_ref(), key, value) {
            tracing::error!(key, error = %err, "failed to persist state slice");
        }
    }
}

/// Read a stored id list, filtering anything that is not a number.
///
/// Missing key, malformed JSON, or a non-array document all yield an empty
/// list.
fn load_stored_ids(storage: &dyn KeyValueStore, key: &str) -> Vec<ProductId> {
    let Some(Value::Array(entries)) = storage::load_json(storage, key) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(Value::as_u64)
        .filter_map(|raw| u32::try_from(raw).ok())
        .map(ProductId::new)
        .collect()
}

/// Read the stored order history, filtering malformed entries.
///
/// An entry survives only if it is an object carrying an `items` array and
/// deserializes as a full order record.
fn load_stored_orders(storage: &dyn KeyValueStore, key: &str) -> Vec<Order> {
    let Some(Value::Array(entries)) = storage::load_json(storage, key) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(|entry| entry.get("items").is_some_and(Value::is_array))
        .filter_map(|entry| match serde_json::from_value::<Order>(entry) {
            Ok(order) => Some(order),
            Err(err) => {
                tracing::warn!(key, error = %err, "skipping malformed stored order");
                None
            }
        })
        .collect()
}

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}

fn day(raw: &str) -> Option<NaiveDate> {
    raw.parse().ok()
}

fn sample_items(catalog: &Catalog, entries: &[(u32, u32)]) -> Vec<OrderItem> {
    entries
        .iter()
        .filter_map(|(id, quantity)| {
            catalog.get(ProductId::new(*id)).map(|product| OrderItem {
                product_id: product.id,
                name: product.name,
                image: product.image,
                price: product.price,
                quantity: *quantity,
            })
        })
        .collect()
}

fn event(status: OrderStatus, timestamp: &str, note: &str) -> OrderEvent {
    OrderEvent {
        status,
        timestamp: ts(timestamp),
        note: Some(note.to_string()),
    }
}

/// Sample orders seeded into an empty history.
fn sample_orders(catalog: &Catalog) -> Vec<Order> {
    vec![
        Order {
            id: OrderId::from("ord-FT-231201"),
            reference: "FT-231201".to_string(),
            placed_at: ts("2025-12-04T14:30:00Z"),
            eta: day("2025-12-11"),
            status: OrderStatus::Shipped,
            subtotal: Money::from_units(527),
            shipping: Money::from_units(12),
            tax: Money::new(rust_decimal::dec!(63.24)),
            total: Money::new(rust_decimal::dec!(602.24)),
            payment_method: "Visa \u{2022}\u{2022}\u{2022}\u{2022} 4242".to_string(),
            tracking_number: Some("TRK-84723910".to_string()),
            address: OrderAddress {
                full_name: "Mia Bennett".to_string(),
                line1: "123 Waverly Ave".to_string(),
                line2: Some("Brgy. Bagong Pag-asa".to_string()),
                city: "Quezon City".to_string(),
                region: "Metro Manila".to_string(),
                postal_code: "1105".to_string(),
                country: "Philippines".to_string(),
                contact_number: "+63 917 555 2103".to_string(),
            },
            items: sample_items(catalog, &[(2, 1), (5, 1)]),
            events: vec![
                event(OrderStatus::Processing, "2025-12-04T14:30:00Z", "Order received"),
                event(OrderStatus::Packed, "2025-12-05T07:10:00Z", "QC passed and packed"),
                event(OrderStatus::Shipped, "2025-12-05T19:45:00Z", "Handed off to SkyExpress"),
            ],
        },
        Order {
            id: OrderId::from("ord-FT-231198"),
            reference: "FT-231198".to_string(),
            placed_at: ts("2025-12-03T06:45:00Z"),
            eta: day("2025-12-09"),
            status: OrderStatus::OutForDelivery,
            subtotal: Money::from_units(2052),
            shipping: Money::from_units(18),
            tax: Money::new(rust_decimal::dec!(246.24)),
            total: Money::new(rust_decimal::dec!(2316.24)),
            payment_method: "GCash \u{2022}\u{2022}\u{2022}\u{2022} 0891".to_string(),
            tracking_number: Some("TRK-84723881".to_string()),
            address: OrderAddress {
                full_name: "Rafael Cortez".to_string(),
                line1: "56 Laurel Street".to_string(),
                line2: Some("Arca Towers".to_string()),
                city: "Makati City".to_string(),
                region: "Metro Manila".to_string(),
                postal_code: "1223".to_string(),
                country: "Philippines".to_string(),
                contact_number: "+63 915 442 1180".to_string(),
            },
            items: sample_items(catalog, &[(21, 1), (7, 1)]),
            events: vec![
                event(OrderStatus::Processing, "2025-12-03T06:45:00Z", "Order received"),
                event(OrderStatus::Packed, "2025-12-03T19:20:00Z", "Packed and sealed"),
                event(
                    OrderStatus::Shipped,
                    "2025-12-04T08:05:00Z",
                    "Dispatched from fulfillment hub",
                ),
                event(
                    OrderStatus::OutForDelivery,
                    "2025-12-05T06:30:00Z",
                    "Courier en route",
                ),
            ],
        },
        Order {
            id: OrderId::from("ord-FT-231170"),
            reference: "FT-231170".to_string(),
            placed_at: ts("2025-11-24T12:20:00Z"),
            eta: day("2025-11-29"),
            status: OrderStatus::Delivered,
            subtotal: Money::from_units(727),
            shipping: Money::from_units(10),
            tax: Money::new(rust_decimal::dec!(87.24)),
            total: Money::new(rust_decimal::dec!(824.24)),
            payment_method: "Mastercard \u{2022}\u{2022}\u{2022}\u{2022} 3016".to_string(),
            tracking_number: Some("TRK-84721007".to_string()),
            address: OrderAddress {
                full_name: "Luna Mercado".to_string(),
                line1: "19 Brookstone Lane".to_string(),
                line2: None,
                city: "Taguig City".to_string(),
                region: "Metro Manila".to_string(),
                postal_code: "1634".to_string(),
                country: "Philippines".to_string(),
                contact_number: "+63 927 882 6612".to_string(),
            },
            items: sample_items(catalog, &[(8, 1), (3, 1)]),
            events: vec![
                event(OrderStatus::Processing, "2025-11-24T12:20:00Z", "Order received"),
                event(OrderStatus::Packed, "2025-11-25T09:45:00Z", "Packed and sealed"),
                event(OrderStatus::Shipped, "2025-11-25T18:20:00Z", "Released to courier"),
                event(
                    OrderStatus::OutForDelivery,
                    "2025-11-28T06:15:00Z",
                    "Courier en route",
                ),
                event(OrderStatus::Delivered, "2025-11-28T14:02:00Z", "Signed by recipient"),
            ],
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rust_decimal::dec;
    use std::sync::Arc;

    fn setup() -> (SharedStorage, Catalog, ShopStore) {
        let storage: SharedStorage = Arc::new(MemoryStore::new());
        let catalog = Catalog::new();
        let store = ShopStore::new(Arc::clone(&storage), &catalog);
        (storage, catalog, store)
    }

    fn payload(items: &[(i64, u32)]) -> PlaceOrderPayload {
        PlaceOrderPayload {
            items: items
                .iter()
                .enumerate()
                .map(|(index, (price, quantity))| OrderItem {
                    product_id: ProductId::new(u32::try_from(index).unwrap() + 1),
                    name: format!("Item {index}"),
                    image: String::new(),
                    price: Money::from_units(*price),
                    quantity: *quantity,
                })
                .collect(),
            payment_method: "Visa".to_string(),
            ..PlaceOrderPayload::default()
        }
    }

    #[test]
    fn test_grouped_quantity_tracks_adds_and_removes() {
        let (_, catalog, mut store) = setup();
        let id = ProductId::new(1);

        store.add_to_cart(id);
        store.add_to_cart(id);
        store.add_to_cart(id);
        store.remove_from_cart(id);

        let view = store.cart_view(&catalog);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);

        // Extra removals are no-ops, never negative
        store.remove_from_cart(id);
        store.remove_from_cart(id);
        store.remove_from_cart(id);
        assert!(store.cart_view(&catalog).is_empty());
    }

    #[test]
    fn test_remove_all_deletes_every_occurrence() {
        let (_, catalog, mut store) = setup();
        let kept = ProductId::new(2);

        store.add_to_cart(ProductId::new(1));
        store.add_to_cart(kept);
        store.add_to_cart(ProductId::new(1));
        store.remove_all_from_cart(ProductId::new(1));

        let view = store.cart_view(&catalog);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].product.id, kept);
    }

    #[test]
    fn test_grouping_preserves_first_occurrence_order() {
        let (_, catalog, mut store) = setup();
        store.add_to_cart(ProductId::new(3));
        store.add_to_cart(ProductId::new(1));
        store.add_to_cart(ProductId::new(3));

        let view = store.cart_view(&catalog);
        let ids: Vec<u32> = view.lines.iter().map(|line| line.product.id.as_u32()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(view.item_count, 3);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_membership() {
        let (_, _, mut store) = setup();
        let id = ProductId::new(7);

        assert!(!store.is_favorite(id));
        store.toggle_favorite(id);
        assert!(store.is_favorite(id));
        store.toggle_favorite(id);
        assert!(!store.is_favorite(id));
    }

    #[test]
    fn test_place_order_empty_items_returns_none() {
        let (_, _, mut store) = setup();
        let before = store.orders().len();

        assert!(store.place_order(payload(&[])).is_none());
        assert_eq!(store.orders().len(), before);
    }

    #[test]
    fn test_place_order_money_breakdown() {
        let (_, _, mut store) = setup();

        let order = store.place_order(payload(&[(100, 2), (50, 1)])).unwrap();
        assert_eq!(order.subtotal, Money::from_units(250));
        assert_eq!(order.tax, Money::from_units(30));
        assert_eq!(order.total, Money::from_units(280));
    }

    #[test]
    fn test_place_order_with_explicit_shipping_and_tax() {
        let (_, _, mut store) = setup();

        let mut input = payload(&[(100, 1)]);
        input.shipping = Some(Money::from_units(15));
        input.tax = Some(Money::new(dec!(7.50)));
        let order = store.place_order(input).unwrap();

        assert_eq!(order.shipping, Money::from_units(15));
        assert_eq!(order.tax, Money::new(dec!(7.5)));
        assert_eq!(order.total, Money::new(dec!(122.50)));
    }

    #[test]
    fn test_place_order_clears_cart_and_prepends() {
        let (_, catalog, mut store) = setup();
        store.add_to_cart(ProductId::new(1));
        store.add_to_cart(ProductId::new(1));

        let items: Vec<OrderItem> = store
            .cart_view(&catalog)
            .lines
            .iter()
            .map(CartLine::to_order_item)
            .collect();
        let order = store
            .place_order(PlaceOrderPayload {
                items,
                payment_method: "GCash".to_string(),
                ..PlaceOrderPayload::default()
            })
            .unwrap();

        assert!(store.cart_ids().is_empty());
        assert_eq!(store.orders()[0].id, order.id);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.events.len(), 1);
        assert_eq!(order.events[0].status, OrderStatus::Processing);
        assert_eq!(order.events[0].note.as_deref(), Some("Order received"));
    }

    #[test]
    fn test_update_order_status_appends_one_event() {
        let (_, _, mut store) = setup();
        let order_id = store.orders()[0].id.clone();
        let before = store.orders()[0].events.len();

        assert!(store.update_order_status(
            &order_id,
            OrderStatus::Delivered,
            Some("Delivery confirmed by shopper".to_string()),
        ));

        let order = store.order(&order_id).unwrap();
        assert_eq!(order.events.len(), before + 1);
        assert_eq!(order.status, OrderStatus::Delivered);
        // Timeline marks every rank at or below delivered as complete
        for status in OrderStatus::ALL {
            assert_eq!(order.step_complete(status), status.rank() <= 5);
        }
    }

    #[test]
    fn test_update_unknown_order_returns_false() {
        let (_, _, mut store) = setup();
        assert!(!store.update_order_status(
            &OrderId::from("ord-missing"),
            OrderStatus::Packed,
            None
        ));
    }

    #[test]
    fn test_event_timestamps_non_decreasing() {
        let (_, _, mut store) = setup();
        let order_id = store.orders()[0].id.clone();
        store.update_order_status(&order_id, OrderStatus::OutForDelivery, None);
        store.update_order_status(&order_id, OrderStatus::Delivered, None);

        let order = store.order(&order_id).unwrap();
        for pair in order.events.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        assert_eq!(order.status, order.events.last().unwrap().status);
    }

    #[test]
    fn test_state_survives_reload() {
        let (storage, catalog, mut store) = setup();
        store.add_to_cart(ProductId::new(4));
        store.toggle_favorite(ProductId::new(9));
        let placed = store.place_order(payload(&[(10, 1)])).unwrap();

        let reloaded = ShopStore::new(storage, &catalog);
        assert!(reloaded.cart_ids().is_empty());
        assert!(reloaded.is_favorite(ProductId::new(9)));
        assert_eq!(reloaded.orders()[0].id, placed.id);
    }

    #[test]
    fn test_sample_orders_seed_empty_history() {
        let (_, _, store) = setup();
        assert_eq!(store.orders().len(), 3);
        assert_eq!(store.orders()[0].reference, "FT-231201");
        // Current status always equals the last event's status
        for order in store.orders() {
            assert_eq!(order.status, order.events.last().unwrap().status);
        }
    }

    #[test]
    fn test_orders_summary_counts() {
        let (_, _, store) = setup();
        let summary = store.orders_summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.in_transit, 2);
        assert_eq!(summary.awaiting_shipment, 0);
        assert_eq!(summary.delivered, 1);
    }

    #[test]
    fn test_stored_ids_filter_non_numbers() {
        let storage: SharedStorage = Arc::new(MemoryStore::new());
        storage
            .save_raw(keys::CART, r#"[1, "two", 3, null, 4.5, 7]"#)
            .unwrap();

        let ids = load_stored_ids(storage.as_ref(), keys::CART);
        let raw: Vec<u32> = ids.iter().map(ProductId::as_u32).collect();
        assert_eq!(raw, vec![1, 3, 7]);
    }

    #[test]
    fn test_stored_non_array_treated_as_empty() {
        let storage: SharedStorage = Arc::new(MemoryStore::new());
        storage.save_raw(keys::CART, r#"{"oops": true}"#).unwrap();
        assert!(load_stored_ids(storage.as_ref(), keys::CART).is_empty());

        storage.save_raw(keys::ORDERS, "42").unwrap();
        assert!(load_stored_orders(storage.as_ref(), keys::ORDERS).is_empty());
    }

    #[test]
    fn test_stored_orders_skip_entries_without_items() {
        let (storage, catalog, mut store) = setup();
        store.place_order(payload(&[(25, 2)])).unwrap();

        // Corrupt the history by appending junk entries
        let mut raw: Vec<Value> =
            serde_json::from_str(&storage.load_raw(keys::ORDERS).unwrap().unwrap()).unwrap();
        raw.push(serde_json::json!({"id": "ord-junk"}));
        raw.push(serde_json::json!("not an order"));
        storage
            .save_raw(keys::ORDERS, &serde_json::to_string(&raw).unwrap())
            .unwrap();

        let reloaded = ShopStore::new(storage, &catalog);
        assert_eq!(reloaded.orders().len(), 4);
    }

    #[test]
    fn test_reference_codes_unique_within_history() {
        let (_, _, mut store) = setup();
        for _ in 0..20 {
            store.place_order(payload(&[(10, 1)]));
        }

        let mut references: Vec<&str> = store
            .orders()
            .iter()
            .map(|order| order.reference.as_str())
            .collect();
        references.sort_unstable();
        references.dedup();
        assert_eq!(references.len(), store.orders().len());
        assert!(references.iter().all(|r| r.starts_with("FT-")));
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (_, _, mut store) = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |kind| sink.borrow_mut().push(kind));

        store.add_to_cart(ProductId::new(1));
        store.toggle_favorite(ProductId::new(1));
        store.place_order(payload(&[(10, 1)]));

        assert_eq!(
            *seen.borrow(),
            vec![
                ChangeKind::Cart,
                ChangeKind::Favorites,
                ChangeKind::Orders,
                ChangeKind::Cart,
            ]
        );
    }
}
