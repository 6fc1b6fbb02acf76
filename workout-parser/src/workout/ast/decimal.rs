//! Exact decimal numbers
//!
//! Distances and percentages are written in base ten (`0.025km`, `87.5%`) and have to come
//! back out exactly as written. `Decimal` is a non-negative fixed-point value with six
//! fractional digits stored as an integer count of millionths, so parsing, unit conversion
//! and summing never touch binary floating point.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FRACTION_DIGITS: usize = 6;
const SCALE: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("`{0}` is not a decimal number")]
    Invalid(String),
    #[error("`{0}` has more than six fractional digits")]
    TooPrecise(String),
    #[error("`{0}` is too large")]
    Overflow(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal {
    micros: u64,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { micros: 0 };

    pub fn from_integer(value: u64) -> Option<Self> {
        value.checked_mul(SCALE).map(|micros| Decimal { micros })
    }

    pub fn is_zero(&self) -> bool {
        self.micros == 0
    }

    pub fn checked_add(self, other: Decimal) -> Option<Decimal> {
        self.micros
            .checked_add(other.micros)
            .map(|micros| Decimal { micros })
    }

    pub fn checked_mul_int(self, factor: u64) -> Option<Decimal> {
        self.micros
            .checked_mul(factor)
            .map(|micros| Decimal { micros })
    }

    pub fn saturating_add(self, other: Decimal) -> Decimal {
        Decimal {
            micros: self.micros.saturating_add(other.micros),
        }
    }

    pub fn saturating_mul_int(self, factor: u64) -> Decimal {
        Decimal {
            micros: self.micros.saturating_mul(factor),
        }
    }

    /// Whole part, truncating any fraction.
    pub fn trunc(&self) -> u64 {
        self.micros / SCALE
    }

    /// Lossy conversion for callers that only display or chart the value.
    pub fn to_f64(&self) -> f64 {
        self.micros as f64 / SCALE as f64
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty()
            || !is_digits(whole)
            || !is_digits(fraction)
            || (text.contains('.') && fraction.is_empty())
        {
            return Err(DecimalError::Invalid(text.to_string()));
        }
        if fraction.len() > FRACTION_DIGITS {
            return Err(DecimalError::TooPrecise(text.to_string()));
        }

        let overflow = || DecimalError::Overflow(text.to_string());
        let whole: u64 = whole.parse().map_err(|_| overflow())?;
        let padded = format!("{fraction:0<width$}", width = FRACTION_DIGITS);
        let fraction: u64 = padded.parse().map_err(|_| overflow())?;

        whole
            .checked_mul(SCALE)
            .and_then(|micros| micros.checked_add(fraction))
            .map(|micros| Decimal { micros })
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.micros / SCALE;
        let fraction = self.micros % SCALE;
        if fraction == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{fraction:0width$}", width = FRACTION_DIGITS);
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
