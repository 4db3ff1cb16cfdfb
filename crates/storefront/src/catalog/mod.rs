//! Product catalog client.
//!
//! Fetches the full product list from the configured catalog endpoint with
//! `reqwest` and caches it using `moka` (5-minute TTL). Category filtering
//! is a pure in-memory predicate over the cached set - changing the filter
//! never triggers a re-fetch.

mod conversions;
mod types;

pub use types::{Product, ProductRating};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

use conversions::{RawProduct, convert_product};

/// How long a fetched catalog stays valid.
const CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Cache key for the full product list.
const PRODUCTS_KEY: &str = "products";

/// Errors that can occur when fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog endpoint returned a non-success status.
    #[error("catalog returned status {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product catalog.
///
/// The full result set is fetched once and cached; all filtering happens
/// in memory against the cached set.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_url: String,
    cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                products_url: config.products_url.to_string(),
                cache,
            }),
        }
    }

    /// Get the full product list, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint returns a
    /// non-success status, or the payload cannot be parsed.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        // Check cache
        if let Some(products) = self.inner.cache.get(PRODUCTS_KEY).await {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let response = self.inner.client.get(&self.inner.products_url).send().await?;

        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let raw: Vec<RawProduct> = match serde_json::from_str(&response_text) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        let products: Arc<Vec<Product>> =
            Arc::new(raw.into_iter().map(convert_product).collect());

        // Cache the result
        self.inner
            .cache
            .insert(PRODUCTS_KEY, Arc::clone(&products))
            .await;

        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }

    /// Get the products in a category, order preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying catalog fetch fails.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let products = self.products().await?;
        Ok(filter_by_category(&products, category))
    }

    /// Invalidate the cached catalog, forcing a re-fetch on next use.
    pub async fn invalidate(&self) {
        self.inner.cache.invalidate(PRODUCTS_KEY).await;
    }
}

/// Filter a product set by exact category match, preserving order.
#[must_use]
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: i64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price: Decimal::from(100),
            image: format!("https://example.com/{id}.jpg"),
            rating: None,
        }
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let products = vec![
            product(1, "Monitor", "electronics"),
            product(2, "Ring", "jewelery"),
            product(3, "Hard Drive", "electronics"),
        ];

        let filtered = filter_by_category(&products, "electronics");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title, "Monitor");
        assert_eq!(filtered[1].title, "Hard Drive");
    }

    #[test]
    fn test_filter_by_category_exact_match_only() {
        let products = vec![product(1, "Monitor", "electronics")];

        assert!(filter_by_category(&products, "Electronics").is_empty());
        assert!(filter_by_category(&products, "electro").is_empty());
    }

    #[test]
    fn test_filter_by_category_no_matches() {
        let products = vec![product(1, "Ring", "jewelery")];
        assert!(filter_by_category(&products, "electronics").is_empty());
    }
}
