//! Money type for representing currency amounts
//!
//! Amounts are stored as integer cents. Entry amounts are never negative;
//! only derived values such as a balance can drop below zero.
//!
//! On the wire an amount is a decimal number of currency units (`100.5`).
//! Integers, fractions and strings such as `"1,250.00"` are all accepted when
//! reading; anything past the second decimal is rounded to the nearest cent.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Largest absolute value representable as an f64 without losing cents
const MAX_EXACT_CENTS: i64 = 1 << 53;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use cashbook::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts "10.50", "$10.50", "10", "10.5" and "1,250.00". Extra decimals
    /// past the second are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let (negative, s) = match original.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, original),
        };
        let s = s.strip_prefix('$').unwrap_or(s).replace(',', "");
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        let cents = match s.split_once('.') {
            Some((units, fraction)) => {
                let units: i64 = if units.is_empty() {
                    0
                } else {
                    units.parse().map_err(|_| invalid())?
                };
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                units
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction))
                    .ok_or_else(out_of_range)?
            }
            None => s
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(out_of_range)?,
        };

        let cents = if negative {
            cents.checked_neg().ok_or_else(out_of_range)?
        } else {
            cents
        };
        Ok(Self(cents))
    }

    /// Convert a decimal number of units, rounding to the nearest cent
    pub fn from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > MAX_EXACT_CENTS as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// The amount as a decimal number of units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Format with a caller-chosen currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }

    /// Plain decimal rendering without a symbol, for machine-readable output
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.unsigned_abs() <= MAX_EXACT_CENTS as u64 {
            serializer.serialize_f64(self.to_decimal())
        } else {
            serializer.serialize_str(&self.to_decimal_string())
        }
    }
}

struct MoneyVisitor;

impl Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount such as 100.50")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money)
            .ok_or_else(|| E::custom(MoneyParseError::OutOfRange(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .map_err(|_| E::custom(MoneyParseError::OutOfRange(v.to_string())))
            .and_then(|v| self.visit_i64(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(123456).format_with_symbol("€"), "€1234.56");
        assert_eq!(Money::from_cents(-99).format_with_symbol("Q"), "-Q0.99");
        assert_eq!(Money::from_cents(4000).to_decimal_string(), "40.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_cents(250);
        assert_eq!((a + b).cents(), 1250);
        assert_eq!((b - a).cents(), -750);

        let mut c = Money::zero();
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("1,250.999").unwrap().cents(), 125099);
        assert_eq!(Money::parse("-3").unwrap().cents(), -300);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.5x").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(matches!(
            Money::parse("99999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758.08"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(Money::parse("922337203685477.58").is_ok());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        let mut total = big;
        total += Money::from_cents(10);
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - big).cents(), i64::MIN);
    }

    #[test]
    fn test_serializes_as_decimal() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");
        assert_eq!(serde_json::to_string(&Money::from_units(100)).unwrap(), "100.0");
        assert_eq!(serde_json::to_string(&Money::from_cents(1999)).unwrap(), "19.99");
    }

    #[test]
    fn test_deserializes_integers_fractions_and_strings() {
        let parse = |json: &str| serde_json::from_str::<Money>(json).unwrap().cents();
        assert_eq!(parse("100"), 10000);
        assert_eq!(parse("100.5"), 10050);
        assert_eq!(parse("19.99"), 1999);
        assert_eq!(parse("0.125"), 13);
        assert_eq!(parse(r#""1,250.00""#), 125000);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Money>("true").is_err());
    }
}
