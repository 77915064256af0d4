//! # Selection State
//!
//! Tracks which purchase option is currently selected and what quantity and
//! price are committed for checkout.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SelectionState                                     │
//! │                                                                         │
//! │  • At most ONE option is active: a fixed bundle OR the custom amount.  │
//! │  • committed_quantity / committed_price derive from exactly the        │
//! │    active selection.                                                    │
//! │  • (0, 0) whenever nothing is active, or the active custom amount is   │
//! │    invalid / not yet entered.                                           │
//! │                                                                         │
//! │   None ──select_bundle──► Bundle(id) ──select_bundle──► Bundle(other)  │
//! │    │                         │                                          │
//! │    │ activate_custom         │ activate_custom (caller closes the      │
//! │    ▼                         ▼  editor first on the way back)          │
//! │   Custom ──commit_custom──► Custom(committed)                          │
//! │    │                                                                    │
//! │    └──clear──► None (0, 0)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This replaces the free-floating page globals of a typical implementation
//! (`currentSelectedButton`, `currentCustomCoinAmount`, ...) with one owned
//! object with a controlled lifetime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CoinBundle;

// =============================================================================
// Active Selection
// =============================================================================

/// Which purchase option is active, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "bundleId")]
pub enum ActiveSelection {
    /// Nothing selected yet
    #[default]
    None,

    /// A fixed bundle, by id
    Bundle(String),

    /// The custom-amount editor owns the selection
    Custom,
}

// =============================================================================
// Selection State
// =============================================================================

/// The single source of truth for "what is about to be purchased".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: ActiveSelection,
    committed_quantity: u64,
    committed_price: Money,
}

impl SelectionState {
    /// Creates an empty selection: nothing active, totals at zero.
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// The currently active option.
    #[inline]
    pub fn active(&self) -> &ActiveSelection {
        &self.active
    }

    /// True when the custom option owns the selection.
    #[inline]
    pub fn is_custom_active(&self) -> bool {
        self.active == ActiveSelection::Custom
    }

    /// Coin quantity committed for checkout (0 when nothing valid).
    #[inline]
    pub fn committed_quantity(&self) -> u64 {
        self.committed_quantity
    }

    /// Price committed for checkout (zero when nothing valid).
    #[inline]
    pub fn committed_price(&self) -> Money {
        self.committed_price
    }

    /// Selects a fixed bundle, replacing whatever was active.
    ///
    /// Mutual exclusion with the custom editor is handled one level up: the
    /// caller closes the editor (its Open→Closed transition) before calling
    /// this, so the editor can clear its visuals without losing its memory.
    pub fn select_bundle(&mut self, bundle: &CoinBundle) {
        self.active = ActiveSelection::Bundle(bundle.id.clone());
        self.committed_quantity = bundle.coins;
        self.committed_price = bundle.price();
    }

    /// Hands the selection to the custom option with nothing committed yet.
    ///
    /// The committed pair stays at (0, 0) until the editor commits a valid
    /// quantity via [`SelectionState::commit_custom`].
    pub fn activate_custom(&mut self) {
        self.active = ActiveSelection::Custom;
        self.committed_quantity = 0;
        self.committed_price = Money::zero();
    }

    /// Commits a validated custom quantity and its price.
    ///
    /// Only meaningful while the custom option is active.
    pub fn commit_custom(&mut self, coins: u64, amount: Money) {
        debug_assert!(self.is_custom_active());
        self.committed_quantity = coins;
        self.committed_price = amount;
    }

    /// Zeroes the committed pair while keeping the custom option active.
    ///
    /// Used when the custom entry turns invalid: the total shown reverts to
    /// 0,00 but the editor stays open.
    pub fn reset_custom_commit(&mut self) {
        debug_assert!(self.is_custom_active());
        self.committed_quantity = 0;
        self.committed_price = Money::zero();
    }

    /// Deselects everything: `(None, 0, 0)`.
    pub fn clear(&mut self) {
        *self = SelectionState::default();
    }

    /// Builds the render contract for the summary sink.
    pub fn summary_with(&self, message: impl Into<String>) -> OrderSummary {
        OrderSummary {
            quantity: self.committed_quantity,
            amount: self.committed_price,
            message: message.into(),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// What the order-summary view receives: `(quantity, amount, message)`.
///
/// A pure function of the latest [`SelectionState`] plus the editor's
/// validity message. The sink that renders it must not fail; see the
/// desktop crate's view module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// Committed coin quantity
    pub quantity: u64,

    /// Committed price
    pub amount: Money,

    /// Validity or price message for the option description line
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(id: &str, coins: u64, cents: i64) -> CoinBundle {
        CoinBundle::new(id, coins, Money::from_cents(cents))
    }

    #[test]
    fn test_new_is_empty() {
        let state = SelectionState::new();
        assert_eq!(state.active(), &ActiveSelection::None);
        assert_eq!(state.committed_quantity(), 0);
        assert!(state.committed_price().is_zero());
    }

    #[test]
    fn test_select_bundle_commits_its_pair() {
        let mut state = SelectionState::new();
        state.select_bundle(&bundle("bundle-350", 350, 413));

        assert_eq!(state.active(), &ActiveSelection::Bundle("bundle-350".into()));
        assert_eq!(state.committed_quantity(), 350);
        assert_eq!(state.committed_price(), Money::from_cents(413));
    }

    #[test]
    fn test_selecting_b_after_a_leaves_only_b() {
        let mut state = SelectionState::new();
        state.select_bundle(&bundle("a", 70, 83));
        state.select_bundle(&bundle("b", 700, 826));

        assert_eq!(state.active(), &ActiveSelection::Bundle("b".into()));
        assert_eq!(state.committed_quantity(), 700);
        assert_eq!(state.committed_price(), Money::from_cents(826));
    }

    #[test]
    fn test_activate_custom_starts_uncommitted() {
        let mut state = SelectionState::new();
        state.select_bundle(&bundle("a", 70, 83));
        state.activate_custom();

        assert!(state.is_custom_active());
        assert_eq!(state.committed_quantity(), 0);
        assert!(state.committed_price().is_zero());
    }

    #[test]
    fn test_commit_and_reset_custom() {
        let mut state = SelectionState::new();
        state.activate_custom();

        state.commit_custom(1_000, Money::from_cents(1_180));
        assert_eq!(state.committed_quantity(), 1_000);
        assert_eq!(state.committed_price(), Money::from_cents(1_180));

        state.reset_custom_commit();
        assert!(state.is_custom_active());
        assert_eq!(state.committed_quantity(), 0);
        assert!(state.committed_price().is_zero());
    }

    #[test]
    fn test_clear() {
        let mut state = SelectionState::new();
        state.select_bundle(&bundle("a", 70, 83));
        state.clear();
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn test_summary_with_message() {
        let mut state = SelectionState::new();
        state.activate_custom();
        state.commit_custom(1_000, Money::from_cents(1_180));

        let summary = state.summary_with("€ 11,80");
        assert_eq!(summary.quantity, 1_000);
        assert_eq!(summary.amount, Money::from_cents(1_180));
        assert_eq!(summary.message, "€ 11,80");
    }
}
