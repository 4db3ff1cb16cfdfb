//! Payment amount type with range validation.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PaymentAmount`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("amount must be a number")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("amount must be positive")]
    NotPositive,
    /// The amount is below the minimum chargeable amount.
    #[error("amount must be at least KSH {}", PaymentAmount::MIN_KSH)]
    BelowMinimum,
    /// The amount is above the maximum chargeable amount.
    #[error("amount must be at most KSH {}", PaymentAmount::MAX_KSH)]
    AboveMaximum,
}

/// A chargeable payment amount in Kenyan shillings.
///
/// Amounts are positive decimals within the closed range
/// [[`MIN_KSH`](Self::MIN_KSH), [`MAX_KSH`](Self::MAX_KSH)] enforced by the
/// payment provider. The range boundaries themselves are valid amounts.
///
/// The `Display` form always carries two fractional digits, matching the
/// wire format expected by the payment backend.
///
/// ## Examples
///
/// ```
/// use duka_core::PaymentAmount;
///
/// let amount = PaymentAmount::parse("100").unwrap();
/// assert_eq!(amount.to_string(), "100.00");
///
/// assert!(PaymentAmount::parse("0").is_err());
/// assert!(PaymentAmount::parse("150000.01").is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PaymentAmount(Decimal);

impl PaymentAmount {
    /// Minimum chargeable amount in KSH.
    pub const MIN_KSH: i64 = 1;

    /// Maximum chargeable amount in KSH.
    pub const MAX_KSH: i64 = 150_000;

    /// Parse a `PaymentAmount` from free-form user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, non-positive,
    /// or outside the chargeable range.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let amount: Decimal = trimmed.parse().map_err(|_| AmountError::NotANumber)?;

        Self::from_decimal(amount)
    }

    /// Validate an already-numeric amount, such as a cart total.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is non-positive or outside the
    /// chargeable range.
    pub fn from_decimal(amount: Decimal) -> Result<Self, AmountError> {
        if amount <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if amount < Decimal::from(Self::MIN_KSH) {
            return Err(AmountError::BelowMinimum);
        }
        if amount > Decimal::from(Self::MAX_KSH) {
            return Err(AmountError::AboveMaximum);
        }

        Ok(Self(amount))
    }

    /// Returns the amount as a decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

impl std::str::FromStr for PaymentAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert!(PaymentAmount::parse("1").is_ok());
        assert!(PaymentAmount::parse("100").is_ok());
        assert!(PaymentAmount::parse("99.99").is_ok());
        assert!(PaymentAmount::parse("150000").is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let amount = PaymentAmount::parse("  100  ").unwrap();
        assert_eq!(amount.to_string(), "100.00");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PaymentAmount::parse(""), Err(AmountError::Empty));
        assert_eq!(PaymentAmount::parse("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(PaymentAmount::parse("abc"), Err(AmountError::NotANumber));
        assert_eq!(PaymentAmount::parse("1o0"), Err(AmountError::NotANumber));
    }

    #[test]
    fn test_parse_not_positive() {
        assert_eq!(PaymentAmount::parse("0"), Err(AmountError::NotPositive));
        assert_eq!(PaymentAmount::parse("-5"), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_parse_below_minimum() {
        assert_eq!(PaymentAmount::parse("0.50"), Err(AmountError::BelowMinimum));
    }

    #[test]
    fn test_parse_above_maximum() {
        assert_eq!(
            PaymentAmount::parse("150000.01"),
            Err(AmountError::AboveMaximum)
        );
        assert_eq!(
            PaymentAmount::parse("1000000"),
            Err(AmountError::AboveMaximum)
        );
    }

    #[test]
    fn test_boundaries_inclusive() {
        assert_eq!(PaymentAmount::parse("1").unwrap().to_string(), "1.00");
        assert_eq!(
            PaymentAmount::parse("150000").unwrap().to_string(),
            "150000.00"
        );
    }

    #[test]
    fn test_from_decimal() {
        let total = Decimal::from(500);
        let amount = PaymentAmount::from_decimal(total).unwrap();
        assert_eq!(amount.amount(), total);

        assert_eq!(
            PaymentAmount::from_decimal(Decimal::ZERO),
            Err(AmountError::NotPositive)
        );
    }

    #[test]
    fn test_display_two_fractional_digits() {
        assert_eq!(PaymentAmount::parse("100").unwrap().to_string(), "100.00");
        assert_eq!(PaymentAmount::parse("99.9").unwrap().to_string(), "99.90");
        assert_eq!(
            PaymentAmount::parse("99.999").unwrap().to_string(),
            "100.00"
        );
    }

    #[test]
    fn test_field_messages() {
        assert_eq!(
            AmountError::BelowMinimum.to_string(),
            "amount must be at least KSH 1"
        );
        assert_eq!(
            AmountError::AboveMaximum.to_string(),
            "amount must be at most KSH 150000"
        );
    }
}
