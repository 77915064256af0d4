//! # Payment Commands
//!
//! Checkout dialog guards and the simulated payment.
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐     ┌────────────┐   │
//! │  │ Summary  │────►│ Checkout │────►│ Processing │────►│ Confirmed  │   │
//! │  │  > 0,00  │     │  dialog  │     │  (2.5 s)   │     │  receipt   │   │
//! │  └──────────┘     └──────────┘     └────────────┘     └────────────┘   │
//! │       │                │                                    │          │
//! │  open_checkout    process_payment                 popups auto-close     │
//! │  (guards)         (policy checkbox)               after 5 s             │
//! │                                                                         │
//! │  Guards: a positive committed total AND a verified account.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No real money moves anywhere: the gateway round-trip is a timer and the
//! receipt is minted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tokio::time::{sleep, Duration};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AccountState, ConfigState, PurchaseState};
use crate::view::{self, NotificationKind};
use coinup_core::format::group_digits;

/// What the checkout dialog displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub quantity: u64,
    pub amount_cents: i64,
    pub account_handle: String,
}

/// Result of a completed (simulated) payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Locally minted payment reference
    pub reference: String,

    pub quantity: u64,
    pub amount_cents: i64,
    pub completed_at: DateTime<Utc>,
}

/// Opens the checkout dialog.
///
/// ## Guards
/// - The committed total must be positive ("Please select a Coin package
///   to recharge.")
/// - The account must be verified ("Please verify your username first.")
///
/// Both failures raise an error toast and fail the command so the dialog
/// never opens on an unpurchasable state.
#[tauri::command]
pub fn open_checkout(
    app: AppHandle,
    purchase: State<'_, PurchaseState>,
    account: State<'_, AccountState>,
    config: State<'_, ConfigState>,
) -> Result<CheckoutSummary, ApiError> {
    debug!("open_checkout command");

    let (quantity, amount) =
        purchase.with_purchase(|p| (p.committed_quantity(), p.committed_price()));

    if !amount.is_positive() {
        let message = "Please select a Coin package to recharge.";
        view::show_notification(
            &app,
            NotificationKind::Error,
            message,
            config.notification_duration_ms,
        );
        return Err(ApiError::selection(message));
    }

    let Some(verified) = account.verified() else {
        let message = "Please verify your username first.";
        view::show_notification(
            &app,
            NotificationKind::Error,
            message,
            config.notification_duration_ms,
        );
        return Err(ApiError::verification(message));
    };

    Ok(CheckoutSummary {
        quantity,
        amount_cents: amount.cents(),
        account_handle: verified.handle,
    })
}

/// Processes the payment (simulated).
///
/// ## Behavior
/// - Requires the policy checkbox (`accepted`)
/// - Re-checks the checkout guards; the selection may have changed while
///   the dialog was open
/// - Sleeps for the configured gateway delay, then mints a receipt
/// - Clears the purchase for the next order and schedules the
///   close-all-popups event after the confirmation interval
///
/// ## Arguments
/// * `accepted` - Whether the Coin Policy checkbox is ticked
#[tauri::command]
pub async fn process_payment(
    app: AppHandle,
    purchase: State<'_, PurchaseState>,
    account: State<'_, AccountState>,
    config: State<'_, ConfigState>,
    accepted: bool,
) -> Result<PaymentReceipt, ApiError> {
    debug!(accepted, "process_payment command");

    if !accepted {
        return Err(ApiError::payment("Please accept the Coin Policy to proceed."));
    }

    let (quantity, amount) =
        purchase.with_purchase(|p| (p.committed_quantity(), p.committed_price()));

    if !amount.is_positive() {
        return Err(ApiError::selection("Please select a Coin package to recharge."));
    }

    let verified = account
        .verified()
        .ok_or_else(|| ApiError::verification("Please verify your username first."))?;

    // Simulated gateway round-trip
    sleep(Duration::from_millis(config.payment_delay_ms)).await;

    let receipt = PaymentReceipt {
        reference: Uuid::new_v4().to_string(),
        quantity,
        amount_cents: amount.cents(),
        completed_at: Utc::now(),
    };

    info!(
        reference = %receipt.reference,
        quantity = receipt.quantity,
        amount_cents = receipt.amount_cents,
        "payment completed"
    );

    view::show_notification(
        &app,
        NotificationKind::Success,
        &format!(
            "{} Coins added to {}!",
            group_digits(receipt.quantity),
            verified.handle
        ),
        config.notification_duration_ms,
    );

    // Fresh start for the next order
    let summary = purchase.with_purchase_mut(|p| p.clear());
    view::render_summary(&app, &summary);

    view::close_all_popups_after(&app, config.confirmation_autoclose_ms);

    Ok(receipt)
}
