//! Core types for Duka.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod phone;

pub use amount::{AmountError, PaymentAmount};
pub use phone::{PhoneNumber, PhoneNumberError};
