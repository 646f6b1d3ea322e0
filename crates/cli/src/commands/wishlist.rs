//! Wishlist commands.

use clap::Subcommand;
use fluxtrade_core::ProductId;

use super::Context;

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Add a product if absent, remove it if present
    Toggle {
        /// Product id
        id: u32,
    },
    /// Show the wishlist
    Show,
}

#[allow(clippy::print_stdout)]
pub fn run(ctx: &mut Context, action: &WishlistAction) {
    match action {
        WishlistAction::Toggle { id } => {
            let id = ProductId::new(*id);
            ctx.shop.toggle_favorite(id);
            if ctx.shop.is_favorite(id) {
                println!("Added product {id} to the wishlist");
            } else {
                println!("Removed product {id} from the wishlist");
            }
        }
        WishlistAction::Show => {
            if ctx.shop.favorites().is_empty() {
                println!("Your wishlist is empty");
                return;
            }
            for id in ctx.shop.favorites() {
                match ctx.catalog.get(*id) {
                    Some(product) => println!(
                        "{:>3}  {:<45} {:>10}",
                        product.id,
                        product.name,
                        product.price.display()
                    ),
                    None => println!("{:>3}  (no longer in catalog)", id),
                }
            }
        }
    }
}
