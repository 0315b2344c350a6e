//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive either as JSON strings (`"2999"`) or numbers
//! (`2999`, `49.5`). Both are normalized to [`Decimal`] here, at the edge,
//! so cart totals are exact and can never become not-a-number.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a price amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a base-10 decimal number.
    #[error("price is not a decimal number: {0}")]
    NotANumber(String),
    /// The input is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// Symbol prefixed to every displayed amount.
const RUPEE_SYMBOL: &str = "₹";

/// A price in Indian rupees, the storefront's only currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in rupees, not paise.
    pub amount: Decimal,
}

impl Price {
    /// Create a price in rupees.
    #[must_use]
    pub const fn inr(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Format for display (e.g., "₹2999.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{RUPEE_SYMBOL}{:.2}", self.amount)
    }

    /// Parse a textual amount into a non-negative decimal.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a base-10 decimal, or
    /// negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use tailorzone_core::Price;
    /// # use rust_decimal::Decimal;
    /// assert_eq!(Price::parse_amount("2999").unwrap(), Decimal::new(2999, 0));
    /// assert!(Price::parse_amount("free").is_err());
    /// ```
    pub fn parse_amount(s: &str) -> Result<Decimal, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(trimmed)
            .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;
        Self::check_amount(amount)
    }

    /// Convert a floating point amount (a JSON number) into a decimal.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN, infinite, out of range, or negative.
    pub fn from_f64_amount(value: f64) -> Result<Decimal, PriceError> {
        let amount =
            Decimal::try_from(value).map_err(|_| PriceError::NotANumber(value.to_string()))?;
        Self::check_amount(amount.normalize())
    }

    fn check_amount(amount: Decimal) -> Result<Decimal, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
