//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    25.50 * 3 + 0.1 + 0.2 drifts in the last digits                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2550 cents × 3 = 7650 cents, always                                  │
//! │    Catalog prices have two decimals, so cents are exact                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_major_minor(25, 50); // $25.50
//! let line = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(line.cents(), 5100);
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Arithmetic is checked only; there are no operators that can overflow.
///
/// ## Wire Format
/// Serializes as a decimal number of major units (`2550` cents is `25.5`),
/// which is what API clients read prices as. Amounts beyond 2^53 cents lose
/// precision on the wire but never in memory. Deserializing rounds to the
/// nearest cent.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLineItem.price_at_add ──► CartLineItem::subtotal
///                                                       │
///                                                       ▼
///                                   Cart::total ──► CheckoutSummary.total_cost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(30075); // Represents $300.75
    /// assert_eq!(price.cents(), 30075);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2550); // $25.50
    /// assert_eq!(unit_price.checked_multiply_quantity(2), Some(Money::from_cents(5100)));
    /// assert_eq!(unit_price.checked_multiply_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Converts a decimal amount of major units, rounding to the nearest cent.
    fn from_major_decimal(major: f64) -> Option<Money> {
        let cents = (major * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Money(cents as i64))
        } else {
            None
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1251.00`. For logs and messages, not localized display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            (self.0 / 100).abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Money::from_major_decimal(major)
            .ok_or_else(|| de::Error::custom(format!("invalid money amount: {major}")))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
