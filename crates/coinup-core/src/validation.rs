//! # Validation Module
//!
//! Input validation for the checkout flow.
//!
//! Unlike the amount *classifications* in [`crate::pricing`], the checks
//! here are genuine validation failures: the caller asked for something
//! malformed and gets a typed error back.
//!
//! ## Usage
//! ```rust
//! use coinup_core::validation::normalize_username;
//!
//! assert_eq!(normalize_username("tik.toker").unwrap(), "@tiktoker");
//! assert!(normalize_username("ab").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum length of a username before normalization.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Validates and normalizes a username into a display handle.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at least [`MIN_USERNAME_LENGTH`] characters
/// - Must not contain spaces
/// - Normalized form keeps only letters, digits and underscores, prefixed
///   with `@`
pub fn normalize_username(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if name.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_USERNAME_LENGTH,
        });
    }

    if name.contains(' ') {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must not contain spaces".to_string(),
        });
    }

    let handle: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if handle.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain letters, numbers, or underscores".to_string(),
        });
    }

    Ok(format!("@{handle}"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("charlie").unwrap(), "@charlie");
        assert_eq!(normalize_username("  charlie  ").unwrap(), "@charlie");
        assert_eq!(normalize_username("tik.toker").unwrap(), "@tiktoker");
        assert_eq!(normalize_username("user_01").unwrap(), "@user_01");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            normalize_username("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(matches!(
            normalize_username("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_spaces() {
        assert!(matches!(
            normalize_username("char lie"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_rejects_nothing_left_to_keep() {
        assert!(normalize_username("!!!").is_err());
    }
}
