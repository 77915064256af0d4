//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A coin price computed as `coins * 0.0118` accumulates binary           │
//! │  representation error before it is ever rounded for display.           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    70 coins × 11,800 cents-per-10,000-coins = 826,000                   │
//! │    (826,000 + 5,000) / 10,000 = 83 cents, exactly                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinup_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(413); // € 4,13
//!
//! // NEVER do this:
//! // let bad = Money::from_float(4.13); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for future refunds/credits without a type change
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for IPC payloads
///
/// ## Where Money Flows
/// ```text
/// CoinBundle.price_cents ──► SelectionState.committed_price ──► total display
/// PriceCalculator quote  ──► SelectionState.committed_price ──► order summary
/// ```
/// Every monetary value in the system flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::money::Money;
    ///
    /// let price = Money::from_cents(413); // Represents € 4,13
    /// assert_eq!(price.cents(), 413);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// Used by the bundle catalog, whose prices are written the way they
    /// appear on screen.
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::money::Money;
    ///
    /// let price = Money::from_euro_parts(4, 13); // € 4,13
    /// assert_eq!(price.cents(), 413);
    /// ```
    #[inline]
    pub const fn from_euro_parts(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    ///
    /// The checkout guard uses this: a purchase can only start once the
    /// committed total is positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Formats the value as a bare decimal string with a comma separator,
    /// the way the total field renders it: `413` → `"4,13"`.
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(83).to_decimal_string(), "0,83");
    /// assert_eq!(Money::zero().to_decimal_string(), "0,00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{},{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the full price label as the summary renders it: `€ 4,13`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€ {}", self.to_decimal_string())
    }
}

/// Default money is zero.
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
        let money = Money::from_cents(413);
        assert_eq!(money.cents(), 413);
        assert_eq!(money.euros(), 4);
        assert_eq!(money.cents_part(), 13);
    }

    #[test]
    fn test_from_euro_parts() {
        let money = Money::from_euro_parts(29_500, 0);
        assert_eq!(money.cents(), 2_950_000);
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(83).to_decimal_string(), "0,83");
        assert_eq!(Money::from_cents(1652).to_decimal_string(), "16,52");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0,00");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0,05");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(83)), "€ 0,83");
        assert_eq!(format!("{}", Money::from_cents(2_950_000)), "€ 29500,00");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
    }
}
