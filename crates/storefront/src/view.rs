//! Declarative view models for the storefront.
//!
//! Rendering is a pure function from (products, category filter, cart) to
//! display structs. Nothing here mutates state or performs I/O; callers
//! own the data and decide when to re-render.

use rust_decimal::Decimal;

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;

/// Number of stars in a full rating.
const STAR_SCALE: usize = 5;

/// Product display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub title: String,
    pub category: String,
    pub price: String,
    pub image: String,
    /// Star-rating string (e.g. `★★★★☆`), when the product has a rating.
    pub stars: Option<String>,
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: u64,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub is_empty: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_price(Decimal::ZERO),
            is_empty: true,
        }
    }
}

/// Full storefront display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontView {
    pub products: Vec<ProductView>,
    pub cart: CartView,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// Format an amount as a display price string.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("KSH {:.2}", amount.round_dp(2))
}

/// Render a rating value as a five-star string, rounded to the nearest star.
#[must_use]
pub fn render_stars(value: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = (value.round().clamp(0.0, STAR_SCALE as f64)) as usize;

    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(STAR_SCALE - filled));
    stars
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            image: product.image.clone(),
            stars: product.rating.as_ref().map(|r| render_stars(r.value)),
        }
    }
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            line_total: format_price(item.line_total()),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: format_price(cart.total()),
            is_empty: cart.is_empty(),
        }
    }
}

/// Render the storefront: the product list (optionally filtered by
/// category, order preserved) and the cart.
#[must_use]
pub fn render(products: &[Product], category: Option<&str>, cart: &Cart) -> StorefrontView {
    let products = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .map(ProductView::from)
        .collect();

    StorefrontView {
        products,
        cart: CartView::from(cart),
    }
}
