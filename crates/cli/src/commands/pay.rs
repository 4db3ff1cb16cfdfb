//! Standalone payment command.

#![allow(clippy::print_stdout)]

use duka_storefront::checkout::{self, CheckoutOutcome, FieldErrors};
use duka_storefront::state::Storefront;

/// Errors that can occur when a payment command does not succeed.
#[derive(Debug, thiserror::Error)]
pub enum PayError {
    /// One or more inputs failed validation.
    #[error("invalid input")]
    InvalidInput,
    /// The payment did not go through.
    #[error("{0}")]
    NotAccepted(String),
}

/// Validate the inputs and send an STK push for an explicit amount.
pub async fn send(
    storefront: &Storefront,
    phone: &str,
    amount: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = checkout::submit_payment(storefront.mpesa(), phone, amount).await;
    report(&outcome)
}

/// Print an outcome and convert non-accepted ones into errors.
pub fn report(outcome: &CheckoutOutcome) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        CheckoutOutcome::Accepted { message } => {
            println!("✓ {message}");
            Ok(())
        }
        CheckoutOutcome::Invalid(errors) => {
            print_field_errors(errors);
            Err(PayError::InvalidInput.into())
        }
        CheckoutOutcome::TimedOut { message } | CheckoutOutcome::Failed { message } => {
            println!("⚠ {message}");
            Err(PayError::NotAccepted(message.clone()).into())
        }
    }
}

fn print_field_errors(errors: &FieldErrors) {
    if let Some(message) = &errors.phone {
        println!("⚠ Phone number: {message}");
    }
    if let Some(message) = &errors.amount {
        println!("⚠ Amount: {message}");
    }
}
