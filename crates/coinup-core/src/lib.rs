//! # coinup-core: Pure Business Logic for Coinup
//!
//! This crate is the **heart** of the coin top-up flow. It contains all
//! business logic as pure functions and state objects with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coinup Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Frontend (WebView)                        │   │
//! │  │   Bundle Grid ──► Custom Field ──► Summary ──► Checkout Modal   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                       Tauri Commands                            │   │
//! │  │   select_bundle, custom_amount_input, process_payment, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coinup-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐  │   │
//! │  │  │  money  │ │ format  │ │ pricing │ │selection │ │ editor  │  │   │
//! │  │  │  Money  │ │grouping │ │ evaluate│ │ Selection│ │ custom  │  │   │
//! │  │  │  cents  │ │helpers  │ │ Quote   │ │ State    │ │ amount  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO TIMERS • PURE STATE & FUNCTIONS    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Thousands grouping for the editable amount field
//! - [`pricing`] - Price calculator with bounds classification
//! - [`types`] - Domain types (CoinBundle, CoinRate)
//! - [`selection`] - Selection state and the order-summary contract
//! - [`editor`] - Custom-amount edit-session state machine
//! - [`validation`] - Username validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Rendering, timers and IPC are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64) to avoid float errors
//! 4. **Classifications over Exceptions**: malformed amount input is an
//!    expected state, never a panic or a fault
//!
//! ## Example Usage
//!
//! ```rust
//! use coinup_core::editor::CustomAmountEditor;
//! use coinup_core::selection::SelectionState;
//!
//! let mut selection = SelectionState::new();
//! let mut editor = CustomAmountEditor::new();
//!
//! editor.open(&mut selection);
//! let update = editor.apply_input(&mut selection, "1000", 4);
//!
//! assert_eq!(update.text, "1,000");
//! assert_eq!(update.summary.amount.cents(), 1_180); // € 11,80
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod editor;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use coinup_core::Money` instead of
// `use coinup_core::money::Money`

pub use editor::{CustomAmountEditor, EditorUpdate};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{evaluate, AmountClassification, Quote};
pub use selection::{ActiveSelection, OrderSummary, SelectionState};
pub use types::{CoinBundle, CoinRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Conversion rate: € 0,0118 per coin, held as 11,800 cents per 10,000
/// coins so every price computation stays in integer math.
pub const COIN_RATE: CoinRate = CoinRate::from_cents_per_myriad(11_800);

/// Smallest custom quantity that can be purchased.
///
/// ## Business Reason
/// Matches the smallest fixed bundle; anything below it would price under
/// one euro cent of margin and is rejected with a "Minimum" message.
pub const MIN_CUSTOM_COINS: u64 = 70;

/// Largest custom quantity that can be purchased in one order.
///
/// ## Business Reason
/// Caps a single simulated payment (2,500,000 coins = € 29.500,00).
/// Entries above it keep rendering but never commit a price.
pub const MAX_CUSTOM_COINS: u64 = 2_500_000;
