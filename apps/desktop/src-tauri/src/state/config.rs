//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COINUP_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// The simulation delays mirror the reference flow: verification feels like
/// a directory lookup, payment like a gateway round-trip, and popups
/// dismiss themselves after a beat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the window chrome and the checkout dialog)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Simulated username-verification delay in milliseconds
    pub verification_delay_ms: u64,

    /// Simulated payment-processing delay in milliseconds
    pub payment_delay_ms: u64,

    /// How long a notification stays on screen before auto-dismissing
    pub notification_duration_ms: u64,

    /// How long the payment confirmation stays before popups close
    pub confirmation_autoclose_ms: u64,
}

impl Default for ConfigState {
    /// Returns default configuration matching the reference behavior:
    /// 1.5 s verification, 2.5 s payment, 3 s notifications, 5 s
    /// confirmation auto-close.
    fn default() -> Self {
        ConfigState {
            store_name: "Coinup".to_string(),
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            verification_delay_ms: 1_500,
            payment_delay_ms: 2_500,
            notification_duration_ms: 3_000,
            confirmation_autoclose_ms: 5_000,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `COINUP_STORE_NAME`: Override store name
    /// - `COINUP_PAYMENT_DELAY_MS`: Override the simulated payment delay
    /// - `COINUP_VERIFICATION_DELAY_MS`: Override the simulated lookup delay
    ///
    /// Delay overrides are handy in development: set them to 0 to skip the
    /// waits.
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("COINUP_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(delay) = std::env::var("COINUP_PAYMENT_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.payment_delay_ms = ms;
            }
        }

        if let Ok(delay) = std::env::var("COINUP_VERIFICATION_DELAY_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                config.verification_delay_ms = ms;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_flow() {
        let config = ConfigState::default();
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.verification_delay_ms, 1_500);
        assert_eq!(config.payment_delay_ms, 2_500);
        assert_eq!(config.notification_duration_ms, 3_000);
        assert_eq!(config.confirmation_autoclose_ms, 5_000);
    }
}
