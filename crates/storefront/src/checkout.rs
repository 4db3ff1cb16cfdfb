//! Checkout flow: input validation, payment initiation, outcome mapping.
//!
//! This is the boundary where typed errors become user-facing messages.
//! Validation failures never touch the network; payment failures are
//! always recoverable - the caller may simply retry.

use duka_core::{AmountError, PaymentAmount, PhoneNumber, PhoneNumberError};
use tracing::instrument;

use crate::cart::Cart;
use crate::mpesa::{MpesaClient, PaymentError};

// User-facing messages, matching the storefront copy.
const MSG_SUCCESS: &str = "STK Push sent! Check your phone to complete payment.";
const MSG_TIMEOUT: &str = "Request timed out. Please check your connection and try again.";
const MSG_NETWORK: &str = "Network error. Please check your internet connection and try again.";
const MSG_REJECTED: &str = "Payment failed. Please try again.";
const MSG_PHONE_REQUIRED: &str = "Phone number is required";
const MSG_PHONE_INVALID: &str = "Please enter a valid Kenyan phone number";
const MSG_AMOUNT_REQUIRED: &str = "Amount is required";
const MSG_AMOUNT_INVALID: &str = "Please enter a valid positive amount";
const MSG_AMOUNT_MIN: &str = "Minimum amount is KSH 1";
const MSG_AMOUNT_MAX: &str = "Maximum amount is KSH 150,000";
const MSG_EMPTY_CART: &str = "Cart is empty. Add products before payment.";

/// Per-field validation messages for a checkout submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Message for the phone number field, if it failed validation.
    pub phone: Option<String>,
    /// Message for the amount field, if it failed validation.
    pub amount: Option<String>,
}

impl FieldErrors {
    /// Whether no field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.amount.is_none()
    }
}

/// Tagged result of a checkout submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The backend accepted the STK push; transient input state was cleared.
    Accepted { message: String },
    /// Inputs were rejected before any network call.
    Invalid(FieldErrors),
    /// The deadline elapsed before the backend responded.
    TimedOut { message: String },
    /// Transport failure or backend rejection.
    Failed { message: String },
}

impl CheckoutOutcome {
    /// Whether the payment was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The outcome's user-facing message, when it carries a single one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Accepted { message } | Self::TimedOut { message } | Self::Failed { message } => {
                Some(message)
            }
            Self::Invalid(_) => None,
        }
    }
}

/// Validate free-form phone and amount inputs.
///
/// # Errors
///
/// Returns per-field messages when either input fails validation.
pub fn validate(
    phone_input: &str,
    amount_input: &str,
) -> Result<(PhoneNumber, PaymentAmount), FieldErrors> {
    let phone = PhoneNumber::parse(phone_input);
    let amount = PaymentAmount::parse(amount_input);

    match (phone, amount) {
        (Ok(phone), Ok(amount)) => Ok((phone, amount)),
        (phone, amount) => Err(FieldErrors {
            phone: phone.err().as_ref().map(phone_message),
            amount: amount.err().as_ref().map(amount_message),
        }),
    }
}

/// Submit a payment for an explicitly entered amount.
///
/// Validates both inputs first; the network is only touched when both
/// pass. This is the standalone payment form flow.
#[instrument(skip_all)]
pub async fn submit_payment(
    client: &MpesaClient,
    phone_input: &str,
    amount_input: &str,
) -> CheckoutOutcome {
    let (phone, amount) = match validate(phone_input, amount_input) {
        Ok(validated) => validated,
        Err(errors) => return CheckoutOutcome::Invalid(errors),
    };

    match client.initiate_stk_push(&phone, amount).await {
        Ok(()) => CheckoutOutcome::Accepted {
            message: MSG_SUCCESS.to_string(),
        },
        Err(err) => outcome_from_error(err),
    }
}

/// Pay for the contents of a cart.
///
/// The amount is the cart total. On success the cart is cleared; on any
/// failure it is left untouched so the user can retry.
#[instrument(skip_all, fields(total = %cart.total()))]
pub async fn pay_cart(
    client: &MpesaClient,
    cart: &mut Cart,
    phone_input: &str,
) -> CheckoutOutcome {
    if cart.is_empty() {
        return CheckoutOutcome::Invalid(FieldErrors {
            phone: None,
            amount: Some(MSG_EMPTY_CART.to_string()),
        });
    }

    let phone = match PhoneNumber::parse(phone_input) {
        Ok(phone) => phone,
        Err(err) => {
            return CheckoutOutcome::Invalid(FieldErrors {
                phone: Some(phone_message(&err)),
                amount: None,
            });
        }
    };

    let amount = match PaymentAmount::from_decimal(cart.total()) {
        Ok(amount) => amount,
        Err(err) => {
            return CheckoutOutcome::Invalid(FieldErrors {
                phone: None,
                amount: Some(amount_message(&err)),
            });
        }
    };

    match client.initiate_stk_push(&phone, amount).await {
        Ok(()) => {
            cart.clear();
            CheckoutOutcome::Accepted {
                message: MSG_SUCCESS.to_string(),
            }
        }
        Err(err) => outcome_from_error(err),
    }
}

/// Map a payment error to its user-facing outcome.
fn outcome_from_error(err: PaymentError) -> CheckoutOutcome {
    match err {
        PaymentError::Timeout => CheckoutOutcome::TimedOut {
            message: MSG_TIMEOUT.to_string(),
        },
        PaymentError::Http(err) => {
            tracing::warn!(error = %err, "Payment request failed");
            CheckoutOutcome::Failed {
                message: MSG_NETWORK.to_string(),
            }
        }
        PaymentError::Rejected { status, message } => {
            tracing::warn!(status, "Payment rejected by backend");
            CheckoutOutcome::Failed {
                message: message.unwrap_or_else(|| MSG_REJECTED.to_string()),
            }
        }
    }
}

fn phone_message(err: &PhoneNumberError) -> String {
    match err {
        PhoneNumberError::Empty => MSG_PHONE_REQUIRED.to_string(),
        _ => MSG_PHONE_INVALID.to_string(),
    }
}

fn amount_message(err: &AmountError) -> String {
    match err {
        AmountError::Empty => MSG_AMOUNT_REQUIRED.to_string(),
        AmountError::NotANumber | AmountError::NotPositive => MSG_AMOUNT_INVALID.to_string(),
        AmountError::BelowMinimum => MSG_AMOUNT_MIN.to_string(),
        AmountError::AboveMaximum => MSG_AMOUNT_MAX.to_string(),
    }
}
