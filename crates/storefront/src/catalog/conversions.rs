//! Conversions from raw catalog endpoint JSON to domain types.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;

use super::types::{Product, ProductRating};

/// Raw product object as returned by the catalog endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct RawProduct {
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Price arrives as a JSON number; converted to `Decimal` for arithmetic.
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub rating: Option<RawRating>,
}

/// Raw rating object nested in a catalog product.
#[derive(Debug, Deserialize)]
pub(super) struct RawRating {
    pub rate: f64,
    #[serde(default)]
    pub count: i64,
}

/// Convert a raw catalog product into a domain [`Product`].
pub(super) fn convert_product(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        title: raw.title,
        category: raw.category,
        price: Decimal::from_f64(raw.price).unwrap_or_default(),
        image: raw.image,
        rating: raw.rating.map(|r| ProductRating {
            value: r.rate,
            count: r.count,
        }),
    }
}
