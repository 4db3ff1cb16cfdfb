//! Application state shared across flows.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::mpesa::MpesaClient;

/// Shared storefront state: configuration and API clients.
///
/// This struct is cheaply cloneable via `Arc`. Session-mutable state (the
/// cart) is deliberately not here - it is owned by the session and passed
/// explicitly to the flows that mutate it.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    mpesa: MpesaClient,
}

impl Storefront {
    /// Create the storefront state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let mpesa = MpesaClient::new(&config.backend);

        Self {
            inner: Arc::new(StorefrontInner {
                config,
                catalog,
                mpesa,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the payment client.
    #[must_use]
    pub fn mpesa(&self) -> &MpesaClient {
        &self.inner.mpesa
    }
}
