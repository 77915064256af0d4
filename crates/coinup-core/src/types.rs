//! # Domain Types
//!
//! Core domain types used throughout Coinup.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │   CoinBundle    │   │      CoinRate        │                        │
//! │  │  ─────────────  │   │  ──────────────────  │                        │
//! │  │  id (business)  │   │  cents_per_myriad    │                        │
//! │  │  coins          │   │  11,800 = € 0,0118   │                        │
//! │  │  price_cents    │   │  per coin            │                        │
//! │  └─────────────────┘   └──────────────────────┘                        │
//! │                                                                         │
//! │  Bundles are read once at startup from the static catalog and never    │
//! │  mutated afterwards.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Coin Rate
// =============================================================================

/// Conversion rate between coins and money, in cents per 10,000 coins.
///
/// ## Why Cents per Myriad?
/// The advertised rate is € 0,0118 per coin — 1.18 cents, which is not an
/// integer. Scaling by 10,000 coins makes it one (11,800) and keeps every
/// price computation in integer math, the same trick tax engines use with
/// basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoinRate(u32);

impl CoinRate {
    /// Creates a rate from cents per 10,000 coins.
    #[inline]
    pub const fn from_cents_per_myriad(cents: u32) -> Self {
        CoinRate(cents)
    }

    /// Returns the rate in cents per 10,000 coins.
    #[inline]
    pub const fn cents_per_myriad(&self) -> u32 {
        self.0
    }

    /// Returns the rate in euros per coin (for display only).
    #[inline]
    pub fn eur_per_coin(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Prices a coin quantity, rounding half-up to whole cents.
    ///
    /// ## Implementation
    /// Integer math throughout: `(coins * rate + 5000) / 10000`.
    /// The +5000 provides the half-up rounding (5000/10000 = 0.5).
    /// i128 intermediates rule out overflow for any quantity we accept.
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::types::CoinRate;
    ///
    /// let rate = CoinRate::from_cents_per_myriad(11_800); // € 0,0118 per coin
    ///
    /// // 70 × 0.0118 = 0.826 → rounds to € 0,83
    /// assert_eq!(rate.price_for(70).cents(), 83);
    /// ```
    pub fn price_for(&self, coins: u64) -> Money {
        let cents = (coins as i128 * self.0 as i128 + 5_000) / 10_000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Coin Bundle
// =============================================================================

/// One of the pre-defined purchase options on the top-up screen.
///
/// ## Lifecycle
/// Created from the static catalog at startup, never mutated, dropped with
/// the process. The price is stored rather than derived so the catalog can
/// carry promotional prices without touching the rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CoinBundle {
    /// Business identifier, e.g. `"bundle-350"`
    pub id: String,

    /// Coin quantity this bundle grants
    pub coins: u64,

    /// Total price of the bundle in cents
    pub price_cents: i64,
}

impl CoinBundle {
    /// Creates a bundle.
    pub fn new(id: impl Into<String>, coins: u64, price: Money) -> Self {
        CoinBundle {
            id: id.into(),
            coins,
            price_cents: price.cents(),
        }
    }

    /// The bundle's total price as `Money`.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_prices_lower_bound() {
        let rate = CoinRate::from_cents_per_myriad(11_800);
        // 70 × 0.0118 = 0.826 → half-up to 0.83
        assert_eq!(rate.price_for(70).cents(), 83);
    }

    #[test]
    fn test_rate_prices_upper_bound() {
        let rate = CoinRate::from_cents_per_myriad(11_800);
        // 2,500,000 × 0.0118 = 29,500.00 exactly
        assert_eq!(rate.price_for(2_500_000).cents(), 2_950_000);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        // 25 cents per 10,000 coins: 200 coins = 0.5 cents → rounds to 1
        let rate = CoinRate::from_cents_per_myriad(25);
        assert_eq!(rate.price_for(200).cents(), 1);
        assert_eq!(rate.price_for(199).cents(), 0);
    }

    #[test]
    fn test_rate_display_conversion() {
        let rate = CoinRate::from_cents_per_myriad(11_800);
        assert!((rate.eur_per_coin() - 0.0118).abs() < 1e-12);
    }

    #[test]
    fn test_bundle_price() {
        let bundle = CoinBundle::new("bundle-350", 350, Money::from_euro_parts(4, 13));
        assert_eq!(bundle.price(), Money::from_cents(413));
        assert_eq!(bundle.coins, 350);
    }

    #[test]
    fn test_bundle_serializes_camel_case() {
        let bundle = CoinBundle::new("bundle-70", 70, Money::from_cents(83));
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["priceCents"], 83);
        assert_eq!(json["id"], "bundle-70");
    }
}
