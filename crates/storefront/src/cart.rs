//! Session-scoped shopping cart.
//!
//! The cart is component-owned mutable state passed explicitly to the
//! flows that need it - there are no globals. The total is recomputed from
//! the line items on every read, never cached.

use rust_decimal::Decimal;

use crate::catalog::Product;

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Session-local line ID assigned by the cart.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
    /// Product image URL, when known.
    pub image: Option<String>,
}

impl CartItem {
    /// Price of this line (`price × quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An in-memory shopping cart, alive for one session.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    next_id: u64,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog product, returning the assigned line ID.
    pub fn add_product(&mut self, product: &Product) -> u64 {
        self.add_item(
            product.title.clone(),
            product.price,
            1,
            Some(product.image.clone()),
        )
    }

    /// Add a line to the cart, returning the assigned line ID.
    pub fn add_item(
        &mut self,
        title: String,
        price: Decimal,
        quantity: u32,
        image: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(CartItem {
            id,
            title,
            price,
            quantity,
            image,
        });

        id
    }

    /// Remove the line with the given ID.
    ///
    /// Returns `true` if a line was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    /// Remove every line from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total of all line items, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The cart's line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
