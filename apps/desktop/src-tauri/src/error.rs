//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Coinup                                 │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('select_bundle')                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown bundle? ── CoreError::BundleNotFound ──┐                │  │
//! │  │         │                                       ▼                │  │
//! │  │  Bad username? ──── ValidationError ────────── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('select_bundle') }                                  │
//! │  catch (e) { /* e.code = "NOT_FOUND", e.message = "..." */ }            │
//! │                                                                         │
//! │  NOTE: out-of-bounds custom amounts never reach this type — they are   │
//! │  classifications inside the editor, not command failures.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use coinup_core::{CoreError, ValidationError};

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Bundle not found: bundle-9000"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('open_checkout');
/// } catch (e) {
///   switch (e.code) {
///     case 'SELECTION_ERROR':
///       showNotification(e.message);
///       break;
///     case 'VERIFICATION_ERROR':
///       showNotification(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (unknown bundle id)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// No purchasable selection yet
    SelectionError,

    /// Username verification failed or missing
    VerificationError,

    /// Payment processing error
    PaymentError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a selection error.
    pub fn selection(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::SelectionError, message)
    }

    /// Creates a verification error.
    pub fn verification(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::VerificationError, message)
    }

    /// Creates a payment error.
    pub fn payment(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::PaymentError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BundleNotFound(id) => ApiError::not_found("Bundle", &id),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to API errors directly.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Makes ApiError work as a Tauri command error.
///
/// Tauri requires the error type to implement `Into<tauri::ipc::InvokeError>`.
/// Since we implement `Serialize`, we can convert to JSON string.
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_not_found() {
        let err: ApiError = CoreError::BundleNotFound("bundle-9000".into()).into();
        assert!(matches!(err.code, ErrorCode::NotFound));
        assert_eq!(err.message, "Bundle not found: bundle-9000");
    }

    #[test]
    fn test_error_code_serializes_screaming() {
        let err = ApiError::selection("Please select a Coin package to recharge.");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SELECTION_ERROR");
    }
}
