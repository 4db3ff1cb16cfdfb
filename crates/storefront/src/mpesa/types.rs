//! Wire types for the payment backend.

use serde::{Deserialize, Serialize};

use duka_core::{PaymentAmount, PhoneNumber};

/// Request body for the STK push endpoint.
///
/// The backend expects camelCase field names and the amount as a string
/// with exactly two fractional digits.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StkPushRequest {
    pub phone_number: String,
    pub amount: String,
}

impl StkPushRequest {
    /// Build a request body from validated inputs.
    #[must_use]
    pub fn new(phone: &PhoneNumber, amount: PaymentAmount) -> Self {
        Self {
            phone_number: phone.as_str().to_owned(),
            amount: amount.to_string(),
        }
    }
}

/// Optional structured error body returned on rejection.
#[derive(Debug, Deserialize)]
pub(super) struct StkPushErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
