//! # Purchase Commands
//!
//! Tauri commands for the bundle grid and the order summary.
//!
//! ## Selection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Lifecycle                                  │
//! │                                                                         │
//! │  ┌──────────┐      ┌───────────┐      ┌───────────┐     ┌──────────┐   │
//! │  │ Nothing  │─────►│  Bundle   │◄────►│  Custom   │────►│ Checkout │   │
//! │  │ selected │      │ selected  │      │  amount   │     │  dialog  │   │
//! │  └──────────┘      └───────────┘      └───────────┘     └──────────┘   │
//! │                         │                  │                            │
//! │                    select_bundle      toggle_custom_amount              │
//! │                         │             custom_amount_input               │
//! │                         │                  │                            │
//! │                         └───── mutually exclusive: picking one          │
//! │                                deselects the other                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::{AppHandle, State};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, PurchaseState};
use crate::view;
use coinup_core::OrderSummary;

/// Gets the current order summary.
///
/// ## Returns
/// The latest `(quantity, amount, message)` triple; all zeros/empty when
/// nothing purchasable is selected.
#[tauri::command]
pub fn get_order_summary(purchase: State<'_, PurchaseState>) -> OrderSummary {
    debug!("get_order_summary command");
    purchase.with_purchase(|p| p.summary())
}

/// Selects a fixed coin bundle.
///
/// ## Behavior
/// - Closes the custom editor if it was open (mutual exclusion; the
///   editor's memory survives)
/// - Commits the bundle's quantity and price
/// - Pushes the updated summary to the render sink
///
/// ## Arguments
/// * `bundle_id` - Catalog id, e.g. `"bundle-350"`
#[tauri::command]
pub fn select_bundle(
    app: AppHandle,
    catalog: State<'_, CatalogState>,
    purchase: State<'_, PurchaseState>,
    bundle_id: String,
) -> Result<OrderSummary, ApiError> {
    debug!(bundle_id = %bundle_id, "select_bundle command");

    let bundle = catalog.get(&bundle_id)?.clone();
    let summary = purchase.with_purchase_mut(|p| p.select_bundle(&bundle));

    view::render_summary(&app, &summary);
    Ok(summary)
}

/// Deselects everything and closes the custom editor.
///
/// ## When Used
/// - User cancels the order
/// - After a completed payment (fresh start)
#[tauri::command]
pub fn clear_selection(app: AppHandle, purchase: State<'_, PurchaseState>) -> OrderSummary {
    debug!("clear_selection command");

    let summary = purchase.with_purchase_mut(|p| p.clear());
    view::render_summary(&app, &summary);
    summary
}
