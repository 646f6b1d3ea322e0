//! Catalog browsing commands.

use clap::Subcommand;
use fluxtrade_core::ProductId;

use super::Context;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List products
    List {
        /// Maximum number of products to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: u32,
    },
}

#[allow(clippy::print_stdout)]
pub fn run(ctx: &Context, action: &CatalogAction) {
    match action {
        CatalogAction::List { limit, category } => {
            let products = ctx
                .catalog
                .list()
                .iter()
                .filter(|product| {
                    category
                        .as_ref()
                        .is_none_or(|wanted| product.category.to_string() == *wanted)
                })
                .take(*limit);

            for product in products {
                let marker = if ctx.shop.is_favorite(product.id) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{marker} {:>3}  {:<45} {:>10}  {}",
                    product.id,
                    product.name,
                    product.price.display(),
                    product.category,
                );
            }
        }
        CatalogAction::Show { id } => match ctx.catalog.get(ProductId::new(*id)) {
            Some(product) => {
                println!("{} (#{})", product.name, product.id);
                println!("  Price:    {}", product.price.display());
                if let Some(original) = product.original_price {
                    println!("  Was:      {}", original.display());
                }
                println!("  Rating:   {} ({} reviews)", product.rating, product.reviews);
                println!("  Category: {}", product.category);
                println!(
                    "  Stock:    {}",
                    if product.in_stock { "in stock" } else { "out of stock" }
                );
                if let Some(description) = &product.description {
                    println!("  {description}");
                }
                if !product.tags.is_empty() {
                    println!("  Tags:     {}", product.tags.join(", "));
                }
            }
            None => println!("No product with id {id}"),
        },
    }
}
