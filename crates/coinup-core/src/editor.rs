//! # Custom Amount Editor
//!
//! The edit-session state machine behind the "Custom" purchase option.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CustomAmountEditor                                  │
//! │                                                                         │
//! │            open()                                                       │
//! │   Closed ──────────► Open ◄──┐                                          │
//! │     ▲                 │      │ apply_input() / apply_blur()             │
//! │     │    close()      │      │   strip → sanitize → group → evaluate    │
//! │     └─────────────────┴──────┘   → commit or zero the selection         │
//! │                                                                         │
//! │  Memory: the last VALID committed quantity survives Close/Open cycles  │
//! │  within the process, so reopening restores the previous entry.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Per-Keystroke Pipeline
//! On every raw text change the editor:
//! 1. strips grouping marks from the incoming text;
//! 2. rejects the edit if any non-digit remains (restoring the grouped
//!    digits-only rendering, caret anchored — see below);
//! 3. treats an empty field as "nothing entered": no error, nothing
//!    committed, total shows 0,00;
//! 4. otherwise parses, re-renders with grouping, prices the quantity, and
//!    either commits `(quantity, amount)` into the selection or zeroes the
//!    committed pair with a message naming the violated bound.
//!
//! ## Caret Contract
//! Re-rendering the field must not jump the caret to the end. The editor
//! counts the digits left of the caret in the incoming text and places the
//! caret after the same number of digits in the re-rendered text, so the
//! caret stays adjacent to the same logical digit across grouping changes
//! and rejected edits.
//!
//! The editor knows nothing about rendering; callers forward the returned
//! [`EditorUpdate`] to whatever surface hosts the text field.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{digits_only, group_digit_run, group_digits, strip_grouping};
use crate::pricing::{evaluate, AmountClassification, Quote};
use crate::selection::{OrderSummary, SelectionState};
use crate::{MAX_CUSTOM_COINS, MIN_CUSTOM_COINS};

// =============================================================================
// Editor Update
// =============================================================================

/// Snapshot returned from every editor operation.
///
/// Carries everything a text surface needs to mirror the session: the
/// canonical field text, where the caret belongs, and the order summary to
/// render alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EditorUpdate {
    /// Whether the edit session is open
    pub open: bool,

    /// Canonical (grouped) field text
    pub text: String,

    /// Caret position in characters from the start of `text`
    pub caret: usize,

    /// Summary for the rendering sink: committed quantity, price, message
    pub summary: OrderSummary,
}

// =============================================================================
// Edit Session
// =============================================================================

/// Live state of an open edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EditSession {
    /// Current grouped rendering of the field
    text: String,

    /// Caret position in characters
    caret: usize,

    /// Message last surfaced for this session
    message: String,
}

// =============================================================================
// Custom Amount Editor
// =============================================================================

/// State machine bound to the custom-amount text surface.
///
/// Owns the edit session and the last-committed memory; writes through to a
/// [`SelectionState`] on every change, which is passed in by the caller so
/// the editor itself stays free of shared-state plumbing.
#[derive(Debug, Clone, Default)]
pub struct CustomAmountEditor {
    /// `Some` while the session is open
    session: Option<EditSession>,

    /// Last quantity committed as valid; survives Close/Open cycles
    last_committed: u64,
}

impl CustomAmountEditor {
    /// Creates a closed editor with no memory.
    pub fn new() -> Self {
        CustomAmountEditor::default()
    }

    /// Whether an edit session is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The last quantity committed as valid (0 if none yet).
    #[inline]
    pub fn last_committed(&self) -> u64 {
        self.last_committed
    }

    /// The range hint shown as placeholder/description: `"70 - 2,500,000"`.
    pub fn range_hint() -> String {
        format!(
            "{} - {}",
            MIN_CUSTOM_COINS,
            group_digits(MAX_CUSTOM_COINS)
        )
    }

    /// Decides whether a direct keystroke may reach the text buffer.
    ///
    /// Only digit characters and the navigation/edit control keys pass;
    /// everything else is suppressed before it mutates the field. Paste is
    /// not filtered here — it lands in [`CustomAmountEditor::apply_input`]
    /// and goes through the same sanitization as any other change.
    ///
    /// ## Example
    /// ```rust
    /// use coinup_core::editor::CustomAmountEditor;
    ///
    /// assert!(CustomAmountEditor::key_allowed("7"));
    /// assert!(CustomAmountEditor::key_allowed("Backspace"));
    /// assert!(!CustomAmountEditor::key_allowed("e"));
    /// assert!(!CustomAmountEditor::key_allowed("Enter"));
    /// ```
    pub fn key_allowed(key: &str) -> bool {
        match key {
            "Backspace" | "Delete" | "ArrowLeft" | "ArrowRight" => true,
            _ => {
                let mut chars = key.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(c), None) if c.is_ascii_digit()
                )
            }
        }
    }

    /// Closed → Open transition.
    ///
    /// Takes over the selection (deselecting any fixed bundle via
    /// [`SelectionState::activate_custom`]). If a previously committed valid
    /// quantity exists, the field is pre-filled with its grouped rendering
    /// and validation re-runs immediately so price and summary stay
    /// consistent; otherwise the session starts empty with the total at
    /// 0,00.
    pub fn open(&mut self, selection: &mut SelectionState) -> EditorUpdate {
        selection.activate_custom();
        self.session = Some(EditSession::default());

        if self.last_committed > 0 {
            let prefill = group_digits(self.last_committed);
            let caret = prefill.chars().count();
            self.apply_input(selection, &prefill, caret)
        } else {
            self.view(selection)
        }
    }

    /// Open → Closed transition.
    ///
    /// If the custom option was the active selection, the selection resets
    /// to `(None, 0, 0)`. The last-committed memory is preserved so a later
    /// [`CustomAmountEditor::open`] restores it.
    pub fn close(&mut self, selection: &mut SelectionState) {
        self.session = None;
        if selection.is_custom_active() {
            selection.clear();
        }
    }

    /// Applies a raw text change (keystroke result or paste) to the session.
    ///
    /// `text` is the field content *after* the change; `caret` the caret
    /// position within it, in characters. Returns the canonicalized state.
    /// A closed editor ignores the change.
    pub fn apply_input(
        &mut self,
        selection: &mut SelectionState,
        text: &str,
        caret: usize,
    ) -> EditorUpdate {
        if self.session.is_none() {
            return self.view(selection);
        }

        let caret = caret.min(text.chars().count());
        let digits_left_of_caret = text
            .chars()
            .take(caret)
            .filter(|c| c.is_ascii_digit())
            .count();

        let stripped = strip_grouping(text);

        if stripped.is_empty() {
            // Nothing entered: no error, nothing committed, total at 0,00.
            self.set_session("", 0, "");
            selection.reset_custom_commit();
            return self.view(selection);
        }

        if !stripped.chars().all(|c| c.is_ascii_digit()) {
            // Rejected edit: restore the grouped rendering of the digits
            // already present and re-anchor the caret. The previously
            // committed state and message stand untouched.
            let digits = digits_only(&stripped);
            let restored = if digits.is_empty() {
                String::new()
            } else {
                group_digit_run(&digits)
            };
            let caret = caret_after_digits(&restored, digits_left_of_caret);
            let message = self.session_message();
            self.set_session(&restored, caret, &message);
            return self.view(selection);
        }

        // All digits: parse, re-render grouped, price.
        let (coins, display) = match stripped.parse::<u64>() {
            Ok(n) => (n, group_digits(n)),
            // A digit run too long for u64 is far over the purchase limit;
            // saturate for classification and render the digits verbatim.
            Err(_) => {
                let trimmed = stripped.trim_start_matches('0');
                (u64::MAX, group_digit_run(trimmed))
            }
        };

        let quote = evaluate(Some(coins));
        let message = Self::message_for(&quote);
        let caret = caret_after_digits(&display, digits_left_of_caret);
        self.set_session(&display, caret, &message);

        if quote.classification.is_valid() {
            selection.commit_custom(quote.coins, quote.amount);
            self.last_committed = quote.coins;
        } else {
            selection.reset_custom_commit();
        }

        self.view(selection)
    }

    /// Re-runs validation on the current text, e.g. when the field loses
    /// focus. Idempotent: with unchanged input the outcome is identical to
    /// the last [`CustomAmountEditor::apply_input`] pass.
    pub fn apply_blur(&mut self, selection: &mut SelectionState) -> EditorUpdate {
        match &self.session {
            Some(session) => {
                let text = session.text.clone();
                let caret = session.caret;
                self.apply_input(selection, &text, caret)
            }
            None => self.view(selection),
        }
    }

    /// Current session snapshot without mutating anything.
    ///
    /// What a surface would render right now: closed editors report empty
    /// text and whatever the selection currently commits.
    pub fn view(&self, selection: &SelectionState) -> EditorUpdate {
        match &self.session {
            Some(session) => EditorUpdate {
                open: true,
                text: session.text.clone(),
                caret: session.caret,
                summary: selection.summary_with(session.message.clone()),
            },
            None => EditorUpdate {
                open: false,
                text: String::new(),
                caret: 0,
                summary: selection.summary_with(""),
            },
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn message_for(quote: &Quote) -> String {
        match quote.classification {
            AmountClassification::Valid => quote.amount.to_string(),
            AmountClassification::BelowMinimum => format!("Minimum: {}", MIN_CUSTOM_COINS),
            AmountClassification::AboveMaximum => {
                format!("Maximum: {}", group_digits(MAX_CUSTOM_COINS))
            }
            AmountClassification::NonNumeric => String::new(),
        }
    }

    fn session_message(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.message.clone())
            .unwrap_or_default()
    }

    fn set_session(&mut self, text: &str, caret: usize, message: &str) {
        self.session = Some(EditSession {
            text: text.to_string(),
            caret,
            message: message.to_string(),
        });
    }
}

/// Returns the caret position just after the `digit_count`-th digit of
/// `text` (0 places it before the first digit). Grouping marks to the left
/// of that digit count toward the offset; the caret never lands past the
/// end of the text.
fn caret_after_digits(text: &str, digit_count: usize) -> usize {
    if digit_count == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in text.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == digit_count {
                return i + 1;
            }
        }
    }
    text.chars().count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn open_editor() -> (CustomAmountEditor, SelectionState) {
        let mut editor = CustomAmountEditor::new();
        let mut selection = SelectionState::new();
        editor.open(&mut selection);
        (editor, selection)
    }

    #[test]
    fn test_open_without_memory_starts_empty() {
        let (editor, selection) = open_editor();
        assert!(editor.is_open());
        assert!(selection.is_custom_active());
        assert_eq!(selection.committed_quantity(), 0);
        assert!(selection.committed_price().is_zero());
    }

    #[test]
    fn test_valid_entry_commits_and_formats() {
        let (mut editor, mut selection) = open_editor();

        // after typing the fourth digit the raw field reads "1000"
        let update = editor.apply_input(&mut selection, "1000", 4);

        assert_eq!(update.text, "1,000");
        assert_eq!(update.caret, 5);
        assert_eq!(update.summary.quantity, 1_000);
        assert_eq!(update.summary.amount, Money::from_cents(1_180));
        assert_eq!(update.summary.message, "€ 11,80");
        assert_eq!(selection.committed_quantity(), 1_000);
    }

    #[test]
    fn test_below_minimum_zeroes_commit() {
        let (mut editor, mut selection) = open_editor();

        let update = editor.apply_input(&mut selection, "69", 2);

        assert_eq!(update.text, "69");
        assert_eq!(update.summary.quantity, 0);
        assert!(update.summary.amount.is_zero());
        assert_eq!(update.summary.message, "Minimum: 70");
        assert!(selection.is_custom_active());
    }

    #[test]
    fn test_above_maximum_names_bound_and_keeps_display() {
        let (mut editor, mut selection) = open_editor();

        let update = editor.apply_input(&mut selection, "2500001", 7);

        // over-limit quantities still render group-formatted
        assert_eq!(update.text, "2,500,001");
        assert_eq!(update.summary.message, "Maximum: 2,500,000");
        assert_eq!(update.summary.quantity, 0);
        assert!(update.summary.amount.is_zero());
    }

    #[test]
    fn test_digit_run_past_u64_still_above_maximum() {
        let (mut editor, mut selection) = open_editor();

        let long = "9".repeat(24);
        let update = editor.apply_input(&mut selection, &long, 24);

        assert_eq!(update.summary.message, "Maximum: 2,500,000");
        assert_eq!(update.text, group_digit_run(&long));
    }

    #[test]
    fn test_empty_field_no_error_nothing_committed() {
        let (mut editor, mut selection) = open_editor();
        editor.apply_input(&mut selection, "1000", 4);

        let update = editor.apply_input(&mut selection, "", 0);

        assert_eq!(update.text, "");
        assert_eq!(update.summary.message, "");
        assert_eq!(update.summary.quantity, 0);
        assert!(selection.is_custom_active());
    }

    #[test]
    fn test_rejected_edit_restores_digits_and_caret() {
        let (mut editor, mut selection) = open_editor();
        let before = editor.apply_input(&mut selection, "1000", 4);
        assert_eq!(before.text, "1,000");

        // 'x' typed after the leading '1': field reads "1x,000", caret at 2
        let update = editor.apply_input(&mut selection, "1x,000", 2);

        // digits are unchanged and the caret stays next to the '1'
        assert_eq!(update.text, "1,000");
        assert_eq!(update.caret, 1);
        // the prior committed state stands
        assert_eq!(update.summary.quantity, 1_000);
        assert_eq!(update.summary.message, "€ 11,80");
    }

    #[test]
    fn test_caret_anchors_across_grouping_change() {
        let (mut editor, mut selection) = open_editor();
        editor.apply_input(&mut selection, "12,345", 6);

        // '6' typed after the '2': raw "126,345", caret 3 (3 digits left)
        let update = editor.apply_input(&mut selection, "126,345", 3);

        assert_eq!(update.text, "126,345");
        assert_eq!(update.caret, 3);
        assert_eq!(update.summary.quantity, 126_345);
    }

    #[test]
    fn test_blur_is_idempotent() {
        let (mut editor, mut selection) = open_editor();
        let typed = editor.apply_input(&mut selection, "1000", 4);

        let first = editor.apply_blur(&mut selection);
        let second = editor.apply_blur(&mut selection);

        assert_eq!(first, typed);
        assert_eq!(second, typed);
    }

    #[test]
    fn test_close_resets_selection_keeps_memory() {
        let (mut editor, mut selection) = open_editor();
        editor.apply_input(&mut selection, "1000", 4);

        editor.close(&mut selection);

        assert!(!editor.is_open());
        assert_eq!(selection.committed_quantity(), 0);
        assert!(selection.committed_price().is_zero());
        assert_eq!(editor.last_committed(), 1_000);
    }

    #[test]
    fn test_reopen_restores_last_committed() {
        let (mut editor, mut selection) = open_editor();
        editor.apply_input(&mut selection, "1,000", 5);
        editor.close(&mut selection);

        let update = editor.open(&mut selection);

        assert_eq!(update.text, "1,000");
        assert_eq!(update.summary.quantity, 1_000);
        assert_eq!(update.summary.amount, Money::from_cents(1_180));
    }

    #[test]
    fn test_invalid_entry_does_not_clobber_memory() {
        let (mut editor, mut selection) = open_editor();
        editor.apply_input(&mut selection, "1000", 4);
        editor.apply_input(&mut selection, "1,0000000", 9);

        // out-of-bounds entry zeroed the commit but not the memory
        assert_eq!(selection.committed_quantity(), 0);
        assert_eq!(editor.last_committed(), 1_000);
    }

    #[test]
    fn test_input_on_closed_editor_is_ignored() {
        let mut editor = CustomAmountEditor::new();
        let mut selection = SelectionState::new();

        let update = editor.apply_input(&mut selection, "1000", 4);

        assert!(!update.open);
        assert_eq!(update.summary.quantity, 0);
        assert!(!selection.is_custom_active());
    }

    #[test]
    fn test_key_filter() {
        for key in ["0", "5", "9", "Backspace", "Delete", "ArrowLeft", "ArrowRight"] {
            assert!(CustomAmountEditor::key_allowed(key), "{key}");
        }
        for key in ["a", "-", ".", ",", " ", "Enter", "Tab", "ArrowUp", "12"] {
            assert!(!CustomAmountEditor::key_allowed(key), "{key}");
        }
    }

    #[test]
    fn test_range_hint() {
        assert_eq!(CustomAmountEditor::range_hint(), "70 - 2,500,000");
    }

    #[test]
    fn test_caret_after_digits() {
        assert_eq!(caret_after_digits("1,000", 0), 0);
        assert_eq!(caret_after_digits("1,000", 1), 1);
        assert_eq!(caret_after_digits("1,000", 2), 3);
        assert_eq!(caret_after_digits("1,000", 4), 5);
        // requests past the digit count clamp to the end
        assert_eq!(caret_after_digits("1,000", 9), 5);
    }
}
