//! Kenyan mobile phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input contains no digits.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not start with a recognized prefix (254, 0, 7, or 1).
    #[error("phone number must start with 254, 0, 7, or 1")]
    UnknownPrefix,
    /// The normalized number is not exactly 12 digits.
    #[error("phone number must normalize to 12 digits")]
    WrongLength,
    /// The digit after the country code is not a valid carrier prefix.
    #[error("phone number must have a 7 or 1 after the country code")]
    InvalidCarrier,
}

/// A Kenyan mobile phone number in canonical dialable form.
///
/// Parsing strips formatting characters and normalizes common local formats
/// to the `254XXXXXXXXX` form expected by the payment backend.
///
/// ## Accepted input formats
///
/// - `254712345678` - already canonical (must be exactly 12 digits)
/// - `0712345678` - leading zero replaced with `254`
/// - `712345678` / `112345678` - bare subscriber number, `254` prepended
/// - Any of the above with spaces, dashes, or a leading `+`
///
/// The canonical form is always `254`, a `7` or `1` carrier digit, and
/// 8 further digits.
///
/// ## Examples
///
/// ```
/// use duka_core::PhoneNumber;
///
/// // Valid numbers normalize to the same canonical form
/// assert_eq!(PhoneNumber::parse("0712345678").unwrap().as_str(), "254712345678");
/// assert_eq!(PhoneNumber::parse("+254 712 345 678").unwrap().as_str(), "254712345678");
///
/// // Invalid numbers are rejected, never panicked on
/// assert!(PhoneNumber::parse("123").is_err());
/// assert!(PhoneNumber::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Country calling code for Kenya, without the `+`.
    pub const COUNTRY_CODE: &'static str = "254";

    /// Length of a canonical number (country code + 9 subscriber digits).
    pub const CANONICAL_LENGTH: usize = 12;

    /// Parse a `PhoneNumber` from free-form user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Contains no digits
    /// - Starts with an unrecognized prefix
    /// - Does not normalize to exactly 12 digits
    /// - Has a carrier digit other than 7 or 1 after the country code
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let cleaned: String = s.chars().filter(char::is_ascii_digit).collect();

        if cleaned.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let normalized = if cleaned.starts_with(Self::COUNTRY_CODE) {
            // Already has the country code; the length check below rejects
            // anything that is not a full subscriber number.
            cleaned
        } else if let Some(rest) = cleaned.strip_prefix('0') {
            format!("{}{rest}", Self::COUNTRY_CODE)
        } else if cleaned.starts_with('7') || cleaned.starts_with('1') {
            format!("{}{cleaned}", Self::COUNTRY_CODE)
        } else {
            return Err(PhoneNumberError::UnknownPrefix);
        };

        if normalized.len() != Self::CANONICAL_LENGTH {
            return Err(PhoneNumberError::WrongLength);
        }

        match normalized.as_bytes().get(Self::COUNTRY_CODE.len()).copied() {
            Some(b'7' | b'1') => Ok(Self(normalized)),
            _ => Err(PhoneNumberError::InvalidCarrier),
        }
    }

    /// Returns the canonical number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the 9-digit subscriber number (after the country code).
    #[must_use]
    pub fn subscriber_number(&self) -> &str {
        self.0.get(Self::COUNTRY_CODE.len()..).unwrap_or("")
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
