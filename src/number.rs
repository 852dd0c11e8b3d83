//! Floating-point amounts with a canonical text encoding.
//!
//! Every numeric cell in the output is rendered through [`Number`], which
//! prints the shortest decimal text that round-trips to the same `f64`.

use crate::error::ParseNumberError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Characters stripped from a decorated money string before parsing.
const MONEY_DECORATIONS: [char; 2] = ['$', ','];

/// A finite 64-bit floating-point amount.
///
/// `Display` writes the shortest exact representation with no exponent and
/// no trailing zeros, so `99.0` becomes `"99"` and `0.0002` stays `"0.0002"`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use cashapp_tax_export::Number;
///
/// let amount = Number::from_str("99.00").unwrap();
/// assert_eq!(amount.to_string(), "99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(f64);

impl Number {
    /// Wraps a raw `f64`.
    pub fn new(value: f64) -> Self {
        Number(value)
    }

    /// Parses a decorated money string such as `"$1,234.56"`.
    ///
    /// All `$` and `,` characters are removed and the remainder must be a
    /// finite decimal number. A leading sign is kept, so `"-$5.00"` is `-5`.
    pub fn parse_money(text: &str) -> std::result::Result<Self, ParseNumberError> {
        let stripped: String = text
            .chars()
            .filter(|c| !MONEY_DECORATIONS.contains(c))
            .collect();
        stripped
            .parse()
            .map_err(|_| ParseNumberError(text.to_string()))
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Number(value)),
            _ => Err(ParseNumberError(s.to_string())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Number(-self.0)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Number::from_str(&s).map_err(serde::de::Error::custom)
    }
}
