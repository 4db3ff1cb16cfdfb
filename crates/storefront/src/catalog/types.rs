//! Domain types for the product catalog.
//!
//! These types provide a clean API separate from the raw catalog endpoint
//! JSON, which is parsed in the conversions module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: i64,
    /// Product title.
    pub title: String,
    /// Category name used for filtering.
    pub category: String,
    /// Unit price.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Review rating, when the catalog provides one.
    pub rating: Option<ProductRating>,
}

/// Product rating data from the catalog's review system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    /// Average rating value on a five-star scale (e.g., 4.5).
    pub value: f64,
    /// Total number of reviews.
    pub count: i64,
}
