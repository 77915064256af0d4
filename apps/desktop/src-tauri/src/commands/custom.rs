//! # Custom Amount Commands
//!
//! Tauri commands binding the custom-amount text surface to the editor
//! state machine.
//!
//! ## Event Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend surface                     Command                           │
//! │  ────────────────                     ───────                           │
//! │                                                                         │
//! │  click "Custom" card ───────────────► toggle_custom_amount              │
//! │  keydown (before buffer mutates) ───► custom_keypress_allowed           │
//! │  input event (text changed) ────────► custom_amount_input               │
//! │  blur ──────────────────────────────► custom_amount_blur                │
//! │                                                                         │
//! │  Every command returns the canonical field text and caret; the          │
//! │  surface mirrors them verbatim (it never formats on its own).           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::debug;

use crate::state::PurchaseState;
use crate::view;
use coinup_core::{CustomAmountEditor, EditorUpdate};

/// Response to opening/closing the custom editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCustomResponse {
    /// The editor snapshot after the toggle
    pub editor: EditorUpdate,

    /// Placeholder / description line while open: `"70 - 2,500,000"`
    pub placeholder: String,
}

/// Opens the custom-amount editor, or closes it when open.
///
/// Opening with a previously committed quantity pre-fills the field and
/// re-runs validation so the price stays consistent; closing while custom
/// was the active selection resets the summary to zero.
#[tauri::command]
pub fn toggle_custom_amount(
    app: AppHandle,
    purchase: State<'_, PurchaseState>,
) -> ToggleCustomResponse {
    debug!("toggle_custom_amount command");

    let editor = purchase.with_purchase_mut(|p| p.toggle_custom());
    view::render_summary(&app, &editor.summary);

    ToggleCustomResponse {
        editor,
        placeholder: CustomAmountEditor::range_hint(),
    }
}

/// Applies a raw text change to the edit session.
///
/// ## Arguments
/// * `text` - Field content after the change (grouped or not)
/// * `caret` - Caret position within it, in characters
///
/// ## Returns
/// The canonicalized field state plus the updated summary.
#[tauri::command]
pub fn custom_amount_input(
    app: AppHandle,
    purchase: State<'_, PurchaseState>,
    text: String,
    caret: usize,
) -> EditorUpdate {
    debug!(text = %text, caret, "custom_amount_input command");

    let update = purchase.with_purchase_mut(|p| p.input_changed(&text, caret));
    view::render_summary(&app, &update.summary);
    update
}

/// Re-runs validation when the field loses focus.
///
/// Idempotent: with unchanged input this cannot change the outcome of the
/// last input pass; it guarantees the displayed state matches the final
/// edited value even if the last input event was dropped.
#[tauri::command]
pub fn custom_amount_blur(app: AppHandle, purchase: State<'_, PurchaseState>) -> EditorUpdate {
    debug!("custom_amount_blur command");

    let update = purchase.with_purchase_mut(|p| p.blur());
    view::render_summary(&app, &update.summary);
    update
}

/// Keystroke filter for the custom field.
///
/// The surface calls this on keydown and suppresses the key when `false`:
/// only digits and Backspace/Delete/ArrowLeft/ArrowRight reach the buffer.
/// Paste bypasses this and is sanitized by `custom_amount_input` instead.
#[tauri::command]
pub fn custom_keypress_allowed(key: String) -> bool {
    CustomAmountEditor::key_allowed(&key)
}
