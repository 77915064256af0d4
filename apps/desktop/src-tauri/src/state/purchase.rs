//! # Purchase State
//!
//! Manages the pending top-up purchase: the selection plus the custom
//! amount edit session.
//!
//! ## Thread Safety
//! The purchase is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify it
//! 2. Only one command should modify it at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Purchase Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Purchase State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command              State Change       │
//! │  ───────────────          ─────────────              ────────────       │
//! │                                                                         │
//! │  Click bundle ───────────► select_bundle() ────────► bundle committed   │
//! │                                                      (editor closes)    │
//! │  Click "Custom" ─────────► toggle_custom_amount() ─► editor opens or    │
//! │                                                      closes             │
//! │  Type in field ──────────► custom_amount_input() ──► sanitize + price   │
//! │                                                                         │
//! │  Field loses focus ──────► custom_amount_blur() ───► revalidate         │
//! │                                                                         │
//! │  View summary ───────────► get_order_summary() ────► (read only)        │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use coinup_core::{CoinBundle, CustomAmountEditor, EditorUpdate, OrderSummary, SelectionState};

/// The pending purchase.
///
/// Owns the two core state objects and keeps their coordination rules in
/// one place: selecting a bundle closes the editor first, toggling the
/// editor hands the selection over, and every summary is derived from the
/// latest state.
#[derive(Debug, Default)]
pub struct Purchase {
    selection: SelectionState,
    editor: CustomAmountEditor,
}

impl Purchase {
    /// Creates an empty purchase: nothing selected, editor closed.
    pub fn new() -> Self {
        Purchase::default()
    }

    /// Selects a fixed bundle.
    ///
    /// If the custom editor is open it closes first (its Open→Closed
    /// transition clears the custom visuals but keeps the last-committed
    /// memory), then the bundle's quantity and price are committed.
    pub fn select_bundle(&mut self, bundle: &CoinBundle) -> OrderSummary {
        if self.editor.is_open() {
            self.editor.close(&mut self.selection);
        }
        self.selection.select_bundle(bundle);
        self.selection.summary_with(bundle.price().to_string())
    }

    /// Opens the custom editor, or closes it if it was open.
    pub fn toggle_custom(&mut self) -> EditorUpdate {
        if self.editor.is_open() {
            self.editor.close(&mut self.selection);
            self.editor.view(&self.selection)
        } else {
            self.editor.open(&mut self.selection)
        }
    }

    /// Forwards a raw text change to the editor.
    pub fn input_changed(&mut self, text: &str, caret: usize) -> EditorUpdate {
        self.editor.apply_input(&mut self.selection, text, caret)
    }

    /// Forwards a focus-loss revalidation pass to the editor.
    pub fn blur(&mut self) -> EditorUpdate {
        self.editor.apply_blur(&mut self.selection)
    }

    /// Deselects everything and closes the editor.
    pub fn clear(&mut self) -> OrderSummary {
        if self.editor.is_open() {
            self.editor.close(&mut self.selection);
        }
        self.selection.clear();
        self.selection.summary_with("")
    }

    /// Committed coin quantity (0 when nothing valid is selected).
    pub fn committed_quantity(&self) -> u64 {
        self.selection.committed_quantity()
    }

    /// Committed price (zero when nothing valid is selected).
    pub fn committed_price(&self) -> coinup_core::Money {
        self.selection.committed_price()
    }

    /// The current order summary.
    pub fn summary(&self) -> OrderSummary {
        self.editor.view(&self.selection).summary
    }

    /// The current editor snapshot.
    pub fn editor_view(&self) -> EditorUpdate {
        self.editor.view(&self.selection)
    }
}

/// Tauri-managed purchase state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Purchase>>`:
/// - `Arc`: shared ownership across threads
/// - `Mutex`: one command mutates the purchase at a time
///
/// ## Why Not RwLock?
/// Purchase operations are quick and most of them modify state. A RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Default)]
pub struct PurchaseState {
    purchase: Arc<Mutex<Purchase>>,
}

impl PurchaseState {
    /// Creates a new empty purchase state.
    pub fn new() -> Self {
        PurchaseState::default()
    }

    /// Executes a function with read access to the purchase.
    pub fn with_purchase<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Purchase) -> R,
    {
        let purchase = self.purchase.lock().expect("Purchase mutex poisoned");
        f(&purchase)
    }

    /// Executes a function with write access to the purchase.
    pub fn with_purchase_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Purchase) -> R,
    {
        let mut purchase = self.purchase.lock().expect("Purchase mutex poisoned");
        f(&mut purchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinup_core::Money;

    fn bundle(id: &str, coins: u64, cents: i64) -> CoinBundle {
        CoinBundle::new(id, coins, Money::from_cents(cents))
    }

    #[test]
    fn test_select_bundle_commits() {
        let mut purchase = Purchase::new();
        let summary = purchase.select_bundle(&bundle("bundle-350", 350, 413));

        assert_eq!(summary.quantity, 350);
        assert_eq!(summary.amount, Money::from_cents(413));
        assert_eq!(summary.message, "€ 4,13");
    }

    #[test]
    fn test_bundle_then_bundle_is_exclusive() {
        let mut purchase = Purchase::new();
        purchase.select_bundle(&bundle("a", 70, 83));
        let summary = purchase.select_bundle(&bundle("b", 700, 826));

        assert_eq!(summary.quantity, 700);
        assert_eq!(purchase.committed_price(), Money::from_cents(826));
    }

    #[test]
    fn test_selecting_bundle_closes_editor() {
        let mut purchase = Purchase::new();
        purchase.toggle_custom();
        purchase.input_changed("1000", 4);
        assert_eq!(purchase.committed_quantity(), 1_000);

        purchase.select_bundle(&bundle("a", 70, 83));

        assert!(!purchase.editor_view().open);
        assert_eq!(purchase.committed_quantity(), 70);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut purchase = Purchase::new();

        let opened = purchase.toggle_custom();
        assert!(opened.open);

        let closed = purchase.toggle_custom();
        assert!(!closed.open);
        assert_eq!(closed.summary.quantity, 0);
        assert!(closed.summary.amount.is_zero());
    }

    #[test]
    fn test_custom_entry_survives_close_and_reopen() {
        let mut purchase = Purchase::new();
        purchase.toggle_custom();
        purchase.input_changed("1,000", 5);
        purchase.toggle_custom(); // close
        let reopened = purchase.toggle_custom();

        assert_eq!(reopened.text, "1,000");
        assert_eq!(reopened.summary.amount, Money::from_cents(1_180));
    }

    #[test]
    fn test_clear() {
        let mut purchase = Purchase::new();
        purchase.select_bundle(&bundle("a", 70, 83));
        let summary = purchase.clear();

        assert_eq!(summary.quantity, 0);
        assert!(summary.amount.is_zero());
    }

    #[test]
    fn test_state_wrapper_round_trip() {
        let state = PurchaseState::new();
        state.with_purchase_mut(|p| {
            p.select_bundle(&bundle("a", 70, 83));
        });
        let quantity = state.with_purchase(|p| p.committed_quantity());
        assert_eq!(quantity, 70);
    }
}
