//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A $19.99 book is stored as 1999 cents                                │
//! │    Discounts truncate toward zero, never round up                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookshop_core::money::Money;
//!
//! let price = Money::from_cents(2000); // $20.00
//! let sale = price.apply_discount_percent(20);
//! assert_eq!(sale.cents(), 1600);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Book.price_cents ──► Book::price() ──► apply_discount_percent ──► sale price
///                                                                      │
///                                          buy_book(id, price) ◄───────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a whole-percent discount and returns the discounted amount.
    ///
    /// ## Formula
    /// `cents - (cents * percent) / 100`, integer division, so the discount
    /// amount is truncated and the customer never pays less than the exact
    /// price would allow.
    ///
    /// ## Example
    /// ```rust
    /// use bookshop_core::money::Money;
    ///
    /// // 5% off $9.99: discount is 49.95 cents, truncated to 49
    /// let sale = Money::from_cents(999).apply_discount_percent(5);
    /// assert_eq!(sale.cents(), 950);
    /// ```
    pub fn apply_discount_percent(&self, percent: u8) -> Money {
        // i128 keeps cents * percent from overflowing near i64::MAX
        let discount = (self.0 as i128 * percent as i128) / 100;
        Money::from_cents(self.0 - discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-style rendering. The CLI uses its configured currency instead.
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
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_discount_truncates() {
        assert_eq!(Money::from_cents(2000).apply_discount_percent(20).cents(), 1600);
        assert_eq!(Money::from_cents(2500).apply_discount_percent(8).cents(), 2300);
        // 7% of 99 = 6.93 → 6
        assert_eq!(Money::from_cents(99).apply_discount_percent(7).cents(), 93);
    }

    #[test]
    fn test_discount_bounds() {
        let price = Money::from_cents(1234);
        assert_eq!(price.apply_discount_percent(0), price);
        assert!(price.apply_discount_percent(100).is_zero());
    }

    #[test]
    fn test_discount_matches_formula_across_range() {
        for p in [0_i64, 1, 7, 99, 100, 1999, 123_457] {
            for d in 0..=100_u8 {
                let expected = p - (p * d as i64) / 100;
                assert_eq!(Money::from_cents(p).apply_discount_percent(d).cents(), expected);
            }
        }
    }
}
