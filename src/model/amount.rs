//! Amount type for monetary values.
//!
//! This module provides the `Amount` type, which wraps `Decimal` and handles values that arrive
//! from the store as JSON numbers, or from user input as strings that may carry the `Ksh`
//! currency label and comma separators.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::str::FromStr;

/// The fixed currency label used for all displayed values.
const CURRENCY_LABEL: &str = "Ksh";

/// Represents a monetary amount in Kenyan shillings.
///
/// This type wraps `Decimal`. It is displayed with two decimal places and a fixed `Ksh` prefix,
/// and serialized as a plain JSON number, which is what the collection resource stores.
///
/// # Examples
///
/// Parsing with the currency label:
/// ```
/// # use expense_sync::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("Ksh 1,500").unwrap();
/// assert_eq!(amount.to_string(), "Ksh 1,500.00");
/// ```
///
/// Parsing a bare number:
/// ```
/// # use expense_sync::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("100").unwrap();
/// assert_eq!(amount.to_string(), "Ksh 100.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.value().is_sign_positive()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // Remove the currency label if present, e.g. "Ksh 100.00" or "-Ksh 100.00"
        let without_label = if let Some(after_minus) = trimmed.strip_prefix('-') {
            match after_minus.trim_start().strip_prefix(CURRENCY_LABEL) {
                Some(after_label) => format!("-{}", after_label.trim_start()),
                None => trimmed.to_string(),
            }
        } else if let Some(after_label) = trimmed.strip_prefix(CURRENCY_LABEL) {
            after_label.trim_start().to_string()
        } else {
            trimmed.to_string()
        };

        // Remove commas (thousand separators)
        let without_commas = without_label.replace(',', "");

        let value = Decimal::from_str(&without_commas).map_err(AmountError)?;
        Ok(Amount { value })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.value().is_sign_negative() {
            ("-", self.value().abs())
        } else {
            ("", self.value())
        };

        write!(
            f,
            "{sign}{CURRENCY_LABEL} {}",
            format_num::format_num!(",.2", num.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a plain number, the wire representation used by the store
        let value = self
            .value
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom("amount is not representable as a number"))?;
        serializer.serialize_f64(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The store writes numbers, but tolerate strings such as "100.50" as well.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Decimal::try_from(n)
                .map(Amount::new)
                .map_err(serde::de::Error::custom),
            Raw::Text(s) => Amount::from_str(&s).map_err(serde::de::Error::custom),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Amount::new(iter.map(|a| a.value()).sum())
    }
}
