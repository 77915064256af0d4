//! # Account State
//!
//! Holds the verified recipient account for the current session.
//!
//! Verification is simulated (see the verify command); what matters here is
//! the state transition: checkout may only open once a verified handle is
//! present. Nothing is persisted — a fresh process starts unverified.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A successfully verified account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedAccount {
    /// Normalized display handle, e.g. `"@charlie"`
    pub handle: String,

    /// When verification completed
    pub verified_at: DateTime<Utc>,
}

/// Tauri-managed account state. `None` until a verification succeeds;
/// a failed attempt resets it to `None`.
#[derive(Debug, Default)]
pub struct AccountState {
    account: Arc<Mutex<Option<VerifiedAccount>>>,
}

impl AccountState {
    /// Creates an unverified account state.
    pub fn new() -> Self {
        AccountState::default()
    }

    /// Stores a verified handle, stamping the verification time.
    pub fn set_verified(&self, handle: impl Into<String>) -> VerifiedAccount {
        let account = VerifiedAccount {
            handle: handle.into(),
            verified_at: Utc::now(),
        };
        *self.account.lock().expect("Account mutex poisoned") = Some(account.clone());
        account
    }

    /// Clears the verified account (failed verification).
    pub fn reset(&self) {
        *self.account.lock().expect("Account mutex poisoned") = None;
    }

    /// The verified account, if any.
    pub fn verified(&self) -> Option<VerifiedAccount> {
        self.account.lock().expect("Account mutex poisoned").clone()
    }

    /// True once a verification has succeeded.
    pub fn is_verified(&self) -> bool {
        self.verified().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unverified() {
        let state = AccountState::new();
        assert!(!state.is_verified());
        assert!(state.verified().is_none());
    }

    #[test]
    fn test_set_and_reset() {
        let state = AccountState::new();
        let account = state.set_verified("@charlie");
        assert_eq!(account.handle, "@charlie");
        assert!(state.is_verified());

        state.reset();
        assert!(!state.is_verified());
    }
}
