//! Duka Core - Shared types library.
//!
//! This crate provides common types used across all Duka components:
//! - `storefront` - Headless storefront session library
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated newtype wrappers for phone numbers and payment amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
