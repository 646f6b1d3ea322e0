//! Cart management commands.

use clap::Subcommand;
use fluxtrade_core::ProductId;

use super::Context;

#[derive(Subcommand)]
pub enum CartAction {
    /// Add units of a product to the cart
    Add {
        /// Product id
        id: u32,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove one unit of a product
    Remove {
        /// Product id
        id: u32,
    },
    /// Remove every unit of a product
    RemoveAll {
        /// Product id
        id: u32,
    },
    /// Empty the cart
    Clear,
    /// Show the grouped cart
    Show,
}

#[allow(clippy::print_stdout)]
pub fn run(ctx: &mut Context, action: &CartAction) {
    match action {
        CartAction::Add { id, quantity } => {
            let id = ProductId::new(*id);
            match ctx.catalog.get(id) {
                Some(product) => {
                    if !product.in_stock {
                        println!("Note: {} is out of stock", product.name);
                    }
                    for _ in 0..*quantity {
                        ctx.shop.add_to_cart(id);
                    }
                    println!("Added {} x {}", quantity, product.name);
                }
                None => println!("No product with id {id}"),
            }
        }
        CartAction::Remove { id } => {
            ctx.shop.remove_from_cart(ProductId::new(*id));
            println!("Removed one unit of product {id}");
        }
        CartAction::RemoveAll { id } => {
            ctx.shop.remove_all_from_cart(ProductId::new(*id));
            println!("Removed product {id} from the cart");
        }
        CartAction::Clear => {
            ctx.shop.clear_cart();
            println!("Cart cleared");
        }
        CartAction::Show => {
            let view = ctx.shop.cart_view(&ctx.catalog);
            if view.is_empty() {
                println!("Your cart is empty");
                return;
            }
            for line in &view.lines {
                println!(
                    "{:>3} x {:<45} {:>10}",
                    line.quantity,
                    line.product.name,
                    line.line_total().display(),
                );
            }
            println!(
                "Subtotal: {} ({} items)",
                view.subtotal.display(),
                view.item_count
            );
        }
    }
}
