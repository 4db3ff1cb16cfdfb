//! Duka Storefront library.
//!
//! A headless storefront session: product catalog fetched from a remote
//! endpoint, an in-memory shopping cart, and a checkout flow that initiates
//! M-Pesa STK push payments against a configured backend.
//!
//! # Architecture
//!
//! - `reqwest` for all outbound HTTP (catalog GET, payment POST)
//! - In-memory caching of the catalog via `moka` (5 minute TTL)
//! - Rendering is a pure function from (products, filter, cart) to view
//!   structs - no display state is mutated as a side effect
//!
//! # Example
//!
//! ```rust,ignore
//! use duka_storefront::{checkout, config::StorefrontConfig, state::Storefront};
//!
//! let storefront = Storefront::new(StorefrontConfig::from_env()?);
//!
//! // Browse the catalog
//! let products = storefront.catalog().products().await?;
//!
//! // Build a cart and pay for it
//! let mut cart = duka_storefront::cart::Cart::new();
//! cart.add_product(&products[0]);
//! let outcome = checkout::pay_cart(storefront.mpesa(), &mut cart, "0712345678").await;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod mpesa;
pub mod state;
pub mod view;
