//! Catalog listing command.

#![allow(clippy::print_stdout)]

use duka_storefront::state::Storefront;
use duka_storefront::view::{self, ProductView};

/// Fetch the catalog and print it, optionally filtered by category.
pub async fn list(
    storefront: &Storefront,
    category: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let products = storefront.catalog().products().await?;

    let rendered = view::render(
        &products,
        category,
        &duka_storefront::cart::Cart::new(),
    );

    if rendered.products.is_empty() {
        match category {
            Some(category) => println!("No products in category '{category}'"),
            None => println!("The catalog is empty"),
        }
        return Ok(());
    }

    for product in &rendered.products {
        print_product(product);
    }

    Ok(())
}

fn print_product(product: &ProductView) {
    println!("{}", product.title);
    println!("  Category: {}", product.category);
    println!("  Price:    {}", product.price);
    if let Some(stars) = &product.stars {
        println!("  Rating:   {stars}");
    }
    println!();
}
