//! # View Sinks
//!
//! The presentation side of the purchase flow, reduced to two one-way
//! interfaces: the order-summary render sink and the notification
//! collaborator. Both are fire-and-forget Tauri events; business logic
//! never touches the frontend directly, which keeps the core testable
//! without a rendering environment.
//!
//! ```text
//! Rust state change ──emit──► "order-summary-updated" ──► summary + total UI
//! verification/payment ─emit► "notification"          ──► toast popup
//!                      timer► "notification-dismiss"  ──► toast hides (3 s)
//!                      timer► "close-all-popups"      ──► overlay + dialogs
//! ```

use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

use coinup_core::OrderSummary;

/// Event carrying the latest `(quantity, amount, message)` triple.
pub const ORDER_SUMMARY_EVENT: &str = "order-summary-updated";

/// Event showing a toast notification.
pub const NOTIFICATION_EVENT: &str = "notification";

/// Event hiding the toast again.
pub const NOTIFICATION_DISMISS_EVENT: &str = "notification-dismiss";

/// Event closing every dialog and the overlay.
pub const CLOSE_ALL_POPUPS_EVENT: &str = "close-all-popups";

// =============================================================================
// Order Summary Sink
// =============================================================================

/// Renders the order summary.
///
/// The sink contract is `render(quantity, amount, message)` with no return
/// value and no failure path: if the emit fails (e.g. during window
/// teardown) the error is logged and swallowed.
pub fn render_summary(app: &AppHandle, summary: &OrderSummary) {
    debug!(quantity = summary.quantity, "render order summary");
    if let Err(err) = app.emit(ORDER_SUMMARY_EVENT, summary) {
        warn!(%err, "order summary emit failed");
    }
}

// =============================================================================
// Notification Collaborator
// =============================================================================

/// Kind of toast to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationPayload {
    kind: NotificationKind,
    message: String,
}

/// Shows a toast notification that auto-dismisses after `duration_ms`.
///
/// Fire-and-forget: the dismiss timer is spawned and never awaited,
/// cancelled or retried.
pub fn show_notification(app: &AppHandle, kind: NotificationKind, message: &str, duration_ms: u64) {
    debug!(?kind, message, "notification");

    let payload = NotificationPayload {
        kind,
        message: message.to_string(),
    };
    if let Err(err) = app.emit(NOTIFICATION_EVENT, &payload) {
        warn!(%err, "notification emit failed");
        return;
    }

    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        sleep(Duration::from_millis(duration_ms)).await;
        if let Err(err) = app.emit(NOTIFICATION_DISMISS_EVENT, &payload) {
            warn!(%err, "notification dismiss emit failed");
        }
    });
}

/// Closes every popup after `delay_ms` (the confirmation auto-close).
pub fn close_all_popups_after(app: &AppHandle, delay_ms: u64) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        if let Err(err) = app.emit(CLOSE_ALL_POPUPS_EVENT, ()) {
            warn!(%err, "close-all-popups emit failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_payload_shape() {
        let payload = NotificationPayload {
            kind: NotificationKind::Error,
            message: "Please verify your username first.".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Please verify your username first.");
    }
}
