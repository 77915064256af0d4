//! # Verification Commands
//!
//! Simulated username verification.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types a username and clicks "Verify"                             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  invoke('verify_username', { username: 'charlie' })                     │
//! │                    │                                                    │
//! │  ┌─────────────────▼──────────────────────────────────────────────┐    │
//! │  │  1. Validate + normalize ("charlie" → "@charlie")              │    │
//! │  │  2. Simulated directory lookup (fixed 1.5 s delay)             │    │
//! │  │  3. Store VerifiedAccount / reset on failure                   │    │
//! │  │  4. Toast success or error (auto-dismisses after 3 s)          │    │
//! │  └─────────────────┬──────────────────────────────────────────────┘    │
//! │                    ▼                                                    │
//! │  Account line shows "@charlie"; checkout is now allowed                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no real identity backend. The lookup is a timer, and the
//! reserved name "erroruser" simulates a directory miss so the failure
//! path can be exercised end to end.

use tauri::{AppHandle, State};
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{AccountState, ConfigState, VerifiedAccount};
use crate::view::{self, NotificationKind};
use coinup_core::validation::normalize_username;

/// Reserved username that always fails the simulated lookup.
const UNKNOWN_USER_SENTINEL: &str = "erroruser";

/// Verifies a username and stores it as the recipient account.
///
/// ## Arguments
/// * `username` - Raw input from the account field
///
/// ## Returns
/// The verified account on success. On failure the stored account is reset
/// and an error toast is shown; the command then fails with
/// `VERIFICATION_ERROR` (or `VALIDATION_ERROR` for empty input).
#[tauri::command]
pub async fn verify_username(
    app: AppHandle,
    account: State<'_, AccountState>,
    config: State<'_, ConfigState>,
    username: String,
) -> Result<VerifiedAccount, ApiError> {
    debug!(username = %username, "verify_username command");

    if username.trim().is_empty() {
        view::show_notification(
            &app,
            NotificationKind::Error,
            "Please enter a username.",
            config.notification_duration_ms,
        );
        return Err(ApiError::validation("Please enter a username."));
    }

    // Malformed names take the same failure path as unknown ones; the
    // frontend shows one message for both.
    let handle = normalize_username(&username).ok();

    // Simulated directory lookup
    sleep(Duration::from_millis(config.verification_delay_ms)).await;

    let handle = handle.filter(|_| username.trim().to_lowercase() != UNKNOWN_USER_SENTINEL);

    match handle {
        Some(handle) => {
            let verified = account.set_verified(&handle);
            info!(handle = %verified.handle, "username verified");
            view::show_notification(
                &app,
                NotificationKind::Success,
                &format!("Account {} verified successfully!", verified.handle),
                config.notification_duration_ms,
            );
            Ok(verified)
        }
        None => {
            account.reset();
            info!("username verification failed");
            view::show_notification(
                &app,
                NotificationKind::Error,
                "Invalid or non-existent username.",
                config.notification_duration_ms,
            );
            Err(ApiError::verification("Invalid or non-existent username."))
        }
    }
}
