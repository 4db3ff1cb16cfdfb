//! Cart checkout command.

#![allow(clippy::print_stdout)]

use duka_storefront::cart::Cart;
use duka_storefront::checkout;
use duka_storefront::state::Storefront;
use duka_storefront::view::CartView;

use super::pay::report;

/// Errors that can occur while building the cart.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// A requested product ID is not in the catalog.
    #[error("no product with ID {0} in the catalog")]
    UnknownProduct(i64),
}

/// Build a cart from catalog product IDs and pay the total.
pub async fn run(
    storefront: &Storefront,
    phone: &str,
    ids: &[i64],
) -> Result<(), Box<dyn std::error::Error>> {
    let products = storefront.catalog().products().await?;

    let mut cart = Cart::new();
    for id in ids {
        let product = products
            .iter()
            .find(|p| p.id == *id)
            .ok_or(CheckoutError::UnknownProduct(*id))?;
        cart.add_product(product);
    }

    print_cart(&CartView::from(&cart));

    let outcome = checkout::pay_cart(storefront.mpesa(), &mut cart, phone).await;
    report(&outcome)
}

fn print_cart(cart: &CartView) {
    println!("Cart:");
    for item in &cart.items {
        println!(
            "  {} × {}  {}  ({})",
            item.quantity, item.title, item.line_total, item.price
        );
    }
    println!("Total: {}", cart.total);
    println!();
}
