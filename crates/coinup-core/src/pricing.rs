//! # Price Calculator
//!
//! Maps a custom coin quantity to a price and a validity classification.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    evaluate(coins)                                      │
//! │                                                                         │
//! │  None (nothing parseable) ──────────► NonNumeric,    € 0,00            │
//! │  Some(c), c < 70 ───────────────────► BelowMinimum,  € 0,00            │
//! │  Some(c), c > 2,500,000 ────────────► AboveMaximum,  € 0,00            │
//! │  Some(c), 70 ≤ c ≤ 2,500,000 ───────► Valid,         c × € 0,0118      │
//! │                                                                         │
//! │  Invalid quantities never produce a price: the committed total stays   │
//! │  at zero until the input is valid again.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are *classifications*, not errors. Out-of-bounds input is an
//! expected state of the edit session, recovered locally by the editor.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{COIN_RATE, MAX_CUSTOM_COINS, MIN_CUSTOM_COINS};

// =============================================================================
// Classification
// =============================================================================

/// Validity classification of a custom coin quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AmountClassification {
    /// Within bounds; a price was computed.
    Valid,

    /// Not a parseable non-negative integer (e.g. nothing entered yet).
    NonNumeric,

    /// Below [`MIN_CUSTOM_COINS`].
    BelowMinimum,

    /// Above [`MAX_CUSTOM_COINS`].
    AboveMaximum,
}

impl AmountClassification {
    /// True only for [`AmountClassification::Valid`].
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, AmountClassification::Valid)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Result of pricing a custom quantity.
///
/// `coins` always reports the *attempted* quantity — even when the amount is
/// out of bounds — so messages can name what the user typed. `amount` is
/// zero unless the classification is `Valid`; an invalid entry never updates
/// the committed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The attempted coin quantity (0 when nothing was parseable)
    pub coins: u64,

    /// Price for the quantity; zero unless `classification.is_valid()`
    pub amount: Money,

    /// Validity classification
    pub classification: AmountClassification,
}

/// Prices a custom coin quantity.
///
/// `None` means nothing parseable was entered. Side-effect-free and
/// deterministic; every call with the same input yields the same quote.
///
/// ## Example
/// ```rust
/// use coinup_core::pricing::{evaluate, AmountClassification};
///
/// let quote = evaluate(Some(70));
/// assert_eq!(quote.classification, AmountClassification::Valid);
/// assert_eq!(quote.amount.cents(), 83); // 70 × 0.0118 = 0.826 → € 0,83
///
/// assert_eq!(evaluate(Some(69)).classification, AmountClassification::BelowMinimum);
/// assert_eq!(evaluate(None).classification, AmountClassification::NonNumeric);
/// ```
pub fn evaluate(coins: Option<u64>) -> Quote {
    match coins {
        None => Quote {
            coins: 0,
            amount: Money::zero(),
            classification: AmountClassification::NonNumeric,
        },
        Some(c) if c < MIN_CUSTOM_COINS => Quote {
            coins: c,
            amount: Money::zero(),
            classification: AmountClassification::BelowMinimum,
        },
        Some(c) if c > MAX_CUSTOM_COINS => Quote {
            coins: c,
            amount: Money::zero(),
            classification: AmountClassification::AboveMaximum,
        },
        Some(c) => Quote {
            coins: c,
            amount: COIN_RATE.price_for(c),
            classification: AmountClassification::Valid,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iff_within_bounds() {
        for c in [70, 71, 1_000, 2_499_999, 2_500_000] {
            assert!(evaluate(Some(c)).classification.is_valid(), "{c}");
        }
        for c in [0, 1, 69, 2_500_001, u64::MAX] {
            assert!(!evaluate(Some(c)).classification.is_valid(), "{c}");
        }
    }

    #[test]
    fn test_minimum_amount() {
        let quote = evaluate(Some(70));
        assert_eq!(quote.amount, Money::from_cents(83));
        assert_eq!(quote.coins, 70);
    }

    #[test]
    fn test_maximum_amount() {
        let quote = evaluate(Some(2_500_000));
        assert_eq!(quote.amount, Money::from_euro_parts(29_500, 0));
    }

    #[test]
    fn test_below_minimum_prices_zero() {
        let quote = evaluate(Some(69));
        assert_eq!(quote.classification, AmountClassification::BelowMinimum);
        assert!(quote.amount.is_zero());
        assert_eq!(quote.coins, 69);
    }

    #[test]
    fn test_above_maximum_reports_attempted_coins() {
        let quote = evaluate(Some(2_500_001));
        assert_eq!(quote.classification, AmountClassification::AboveMaximum);
        assert!(quote.amount.is_zero());
        // the attempted quantity survives for message formatting
        assert_eq!(quote.coins, 2_500_001);
    }

    #[test]
    fn test_non_numeric() {
        let quote = evaluate(None);
        assert_eq!(quote.classification, AmountClassification::NonNumeric);
        assert!(quote.amount.is_zero());
        assert_eq!(quote.coins, 0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(evaluate(Some(12_345)), evaluate(Some(12_345)));
    }
}
