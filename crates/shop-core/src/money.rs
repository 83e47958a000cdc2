//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Storage vs. Wire
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  SQLite column           Rust                  JSON                     │
//! │  ─────────────           ────                  ────                     │
//! │  price_cents = 999  ◄──► Money(999)  ◄──────►  "price": 9.99            │
//! │                                                                         │
//! │  The database and all arithmetic use integer cents.                    │
//! │  Only the serde boundary converts to a decimal number.                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(1099);
//! assert_eq!(price.dollars(), 10);
//! assert_eq!(price.cents_part(), 99);
//! ```

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Largest distance from a whole cent still treated as float noise.
const SUB_CENT_TOLERANCE: f64 = 1e-6;

/// A monetary value in the smallest currency unit (cents).
///
/// Stored as a single `INTEGER` column; the `sqlx` feature derives a
/// transparent `sqlx::Type` so it binds and decodes as a plain `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount in major units (e.g. `9.99`) to Money.
    ///
    /// The amount must be a whole number of cents; binary float noise such
    /// as `9.99 * 100 == 998.9999999999999` is absorbed, but `9.999` is not
    /// a valid price. Returns `None` for sub-cent amounts, NaN, infinities,
    /// and amounts outside the `i64` cent range.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(9.99), Some(Money::from_cents(999)));
    /// assert_eq!(Money::from_decimal(9.999), None);
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let scaled = amount * 100.0;
        let cents = scaled.round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }

        // Absolute slack for small amounts, a few ulps for large ones
        let tolerance = SUB_CENT_TOLERANCE.max(scaled.abs() * f64::EPSILON * 8.0);
        if (scaled - cents).abs() > tolerance {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the amount in major units as a decimal number.
    ///
    /// Used only at the JSON boundary.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation for logs and seed output.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Serializes as a decimal number in major units: `Money(999)` → `9.99`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

/// Accepts any JSON number in major units with at most two decimals.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount)
            .ok_or_else(|| {
                de::Error::custom(format!(
                    "invalid money amount {}: expected a whole number of cents",
                    amount
                ))
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_absorbs_float_noise() {
        // 9.99 * 100 is 998.9999999999999 in f64
        assert_eq!(Money::from_decimal(9.99), Some(Money::from_cents(999)));
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_decimal(12.0), Some(Money::from_cents(1200)));
        assert_eq!(Money::from_decimal(-5.5), Some(Money::from_cents(-550)));
    }

    #[test]
    fn test_from_decimal_rejects_sub_cent_amounts() {
        assert_eq!(Money::from_decimal(9.999), None);
        assert_eq!(Money::from_decimal(0.004), None);
        assert_eq!(Money::from_decimal(-1.005), None);

        // Large but exact amounts still convert
        assert_eq!(
            Money::from_decimal(12_345_678_901.23),
            Some(Money::from_cents(1_234_567_890_123))
        );
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(1e300), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_json_is_decimal() {
        let json = serde_json::to_string(&Money::from_cents(999)).unwrap();
        assert_eq!(json, "9.99");

        let parsed: Money = serde_json::from_str("9.99").unwrap();
        assert_eq!(parsed.cents(), 999);

        // Integers are valid amounts too
        let parsed: Money = serde_json::from_str("3").unwrap();
        assert_eq!(parsed.cents(), 300);
    }

    #[test]
    fn test_json_rejects_non_numbers() {
        assert!(serde_json::from_str::<Money>("\"9.99\"").is_err());
        assert!(serde_json::from_str::<Money>("9.999").is_err());
        assert!(serde_json::from_str::<Money>("null").is_err());
    }
}
