//! Order placement and tracking commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fluxtrade_core::{Money, OrderStatus};
use fluxtrade_store::models::{Order, OrderAddress, PlaceOrderPayload};
use fluxtrade_store::shop::CartLine;
use rust_decimal::Decimal;
use thiserror::Error;

use super::Context;

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrderCommandError {
    /// The cart has no resolvable lines to check out.
    #[error("The cart is empty; add products before placing an order")]
    EmptyCart,

    /// The given status is not a known order status.
    #[error("Invalid status: {0}. Valid statuses: processing, packed, shipped, out_for_delivery, delivered, cancelled")]
    InvalidStatus(String),

    /// No order matches the given id or reference.
    #[error("No order matches '{0}'")]
    UnknownOrder(String),
}

#[derive(Args)]
pub struct AddressArgs {
    /// Recipient full name
    #[arg(long)]
    pub name: String,

    /// Street address
    #[arg(long)]
    pub line1: String,

    /// Apartment, suite, barangay...
    #[arg(long)]
    pub line2: Option<String>,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub region: String,

    #[arg(long)]
    pub postal_code: String,

    #[arg(long)]
    pub country: String,

    /// Contact phone number
    #[arg(long)]
    pub contact: String,
}

impl From<AddressArgs> for OrderAddress {
    fn from(args: AddressArgs) -> Self {
        Self {
            full_name: args.name,
            line1: args.line1,
            line2: args.line2,
            city: args.city,
            region: args.region,
            postal_code: args.postal_code,
            country: args.country,
            contact_number: args.contact,
        }
    }
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// List the order history, most recent first
    List {
        /// Only show orders in this status
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show one order with its tracking timeline
    Show {
        /// Order id or reference code
        order: String,
    },
    /// Place an order from the current cart
    Place {
        /// Payment method label (e.g. "Visa 4242")
        #[arg(long)]
        payment: String,

        /// Shipping fee in currency units
        #[arg(long)]
        shipping: Option<Decimal>,

        /// Flat tax rate override (e.g. 0.12)
        #[arg(long)]
        tax_rate: Option<Decimal>,

        /// Estimated arrival date (YYYY-MM-DD)
        #[arg(long)]
        eta: Option<NaiveDate>,

        /// Note for the first timeline event
        #[arg(long)]
        note: Option<String>,

        #[command(flatten)]
        address: AddressArgs,
    },
    /// Append a status event to an order
    Advance {
        /// Order id or reference code
        order: String,

        /// New status
        status: String,

        /// Optional timeline note
        #[arg(long)]
        note: Option<String>,
    },
}

pub fn run(ctx: &mut Context, action: OrderAction) -> Result<(), OrderCommandError> {
    match action {
        OrderAction::List { status } => list(ctx, status.as_deref()),
        OrderAction::Show { order } => {
            let order = find_order(ctx, &order)?.clone();
            show(&order);
            Ok(())
        }
        OrderAction::Place {
            payment,
            shipping,
            tax_rate,
            eta,
            note,
            address,
        } => place(ctx, payment, shipping, tax_rate, eta, note, address),
        OrderAction::Advance {
            order,
            status,
            note,
        } => advance(ctx, &order, &status, note),
    }
}

#[allow(clippy::print_stdout)]
fn list(ctx: &Context, status: Option<&str>) -> Result<(), OrderCommandError> {
    let status = status
        .map(|raw| {
            raw.parse::<OrderStatus>()
                .map_err(|_| OrderCommandError::InvalidStatus(raw.to_string()))
        })
        .transpose()?;

    let summary = ctx.shop.orders_summary();
    println!(
        "{} orders ({} awaiting shipment, {} in transit, {} delivered)",
        summary.total, summary.awaiting_shipment, summary.in_transit, summary.delivered
    );

    for order in ctx.shop.orders() {
        if status.is_some_and(|wanted| order.status != wanted) {
            continue;
        }
        println!(
            "{}  {}  {:<16}  {:>10}  {}",
            order.id,
            order.placed_at.format("%Y-%m-%d"),
            order.status.label(),
            order.total.display(),
            order.reference,
        );
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn show(order: &Order) {
    println!("Order {} ({})", order.reference, order.id);
    println!("  Placed:   {}", order.placed_at.format("%Y-%m-%d %H:%M UTC"));
    if let Some(eta) = order.eta {
        println!("  ETA:      {eta}");
    }
    println!("  Status:   {}", order.status.label());
    println!("  Payment:  {}", order.payment_method);
    if let Some(tracking) = &order.tracking_number {
        println!("  Tracking: {tracking}");
    }
    println!("  Ship to:  {}, {}", order.address.full_name, order.address.city);

    println!("  Items:");
    for item in &order.items {
        println!(
            "    {:>3} x {:<45} {:>10}",
            item.quantity,
            item.name,
            item.line_total().rounded().display(),
        );
    }
    println!("  Subtotal: {}", order.subtotal.display());
    println!("  Shipping: {}", order.shipping.display());
    println!("  Tax:      {}", order.tax.display());
    println!("  Total:    {}", order.total.display());

    println!("  Timeline:");
    for event in &order.events {
        let marker = if order.step_complete(event.status) {
            "x"
        } else {
            " "
        };
        println!(
            "    [{marker}] {}  {:<16}  {}",
            event.timestamp.format("%Y-%m-%d %H:%M"),
            event.status.label(),
            event.note.as_deref().unwrap_or(""),
        );
    }
}

#[allow(clippy::print_stdout)]
fn place(
    ctx: &mut Context,
    payment: String,
    shipping: Option<Decimal>,
    tax_rate: Option<Decimal>,
    eta: Option<NaiveDate>,
    note: Option<String>,
    address: AddressArgs,
) -> Result<(), OrderCommandError> {
    let view = ctx.shop.cart_view(&ctx.catalog);
    if view.is_empty() {
        return Err(OrderCommandError::EmptyCart);
    }

    let payload = PlaceOrderPayload {
        items: view.lines.iter().map(CartLine::to_order_item).collect(),
        shipping: shipping.map(Money::new),
        tax_rate,
        tax: None,
        payment_method: payment,
        address: address.into(),
        eta,
        note,
        tracking_number: None,
    };

    // The store re-checks for empty items; the cart view above is non-empty
    match ctx.shop.place_order(payload) {
        Some(order) => {
            println!(
                "Order {} placed: {} ({} items)",
                order.reference,
                order.total.display(),
                order.unit_count()
            );
            println!("Track it with: ft-cli order show {}", order.id);
            Ok(())
        }
        None => Err(OrderCommandError::EmptyCart),
    }
}

#[allow(clippy::print_stdout)]
fn advance(
    ctx: &mut Context,
    order: &str,
    status: &str,
    note: Option<String>,
) -> Result<(), OrderCommandError> {
    let status: OrderStatus = status
        .parse()
        .map_err(|_| OrderCommandError::InvalidStatus(status.to_string()))?;
    let order_id = find_order(ctx, order)?.id.clone();

    ctx.shop.update_order_status(&order_id, status, note);
    println!("Order {order_id} is now {}", status.label());
    Ok(())
}

/// Resolve an order by id or reference code.
fn find_order<'a>(ctx: &'a Context, needle: &str) -> Result<&'a Order, OrderCommandError> {
    ctx.shop
        .orders()
        .iter()
        .find(|order| order.id.as_str() == needle || order.reference == needle)
        .ok_or_else(|| OrderCommandError::UnknownOrder(needle.to_string()))
}
