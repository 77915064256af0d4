//! # Number Formatting
//!
//! Grouping helpers for the editable coin-amount field.
//!
//! The field displays quantities with thousands separators (`1,234,567`)
//! while the rest of the system works on plain integers. These helpers
//! convert between the two. All of them are pure and allocation-cheap;
//! none of them decide validity — that is [`crate::pricing`]'s job.

/// The thousands separator used on screen.
pub const GROUPING_MARK: char = ',';

// =============================================================================
// Stripping
// =============================================================================

/// Removes every grouping mark from `text`, leaving the rest untouched.
///
/// Validity is judged on the *stripped* text: `"1,234"` strips to `"1234"`
/// (all digits, fine) while `"12a4"` strips to `"12a4"` and is rejected by
/// the editor. Other characters are deliberately not removed here.
///
/// ## Example
/// ```rust
/// use coinup_core::format::strip_grouping;
///
/// assert_eq!(strip_grouping("1,234,567"), "1234567");
/// assert_eq!(strip_grouping("12a4"), "12a4");
/// ```
pub fn strip_grouping(text: &str) -> String {
    text.chars().filter(|&c| c != GROUPING_MARK).collect()
}

/// Keeps only ASCII digits.
///
/// Used to recover the display after a rejected edit: the field is restored
/// to the digits-only interpretation of whatever was typed.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Grouping
// =============================================================================

/// Formats a non-negative integer with a separator every three digits
/// from the right.
///
/// ## Example
/// ```rust
/// use coinup_core::format::group_digits;
///
/// assert_eq!(group_digits(0), "0");
/// assert_eq!(group_digits(1_234_567), "1,234,567");
/// ```
pub fn group_digits(n: u64) -> String {
    group_digit_run(&n.to_string())
}

/// Groups a raw run of ASCII digits without parsing it.
///
/// Display-only path for digit runs too long to fit `u64`: such input is
/// already far over any purchase limit, but the field still has to render
/// what was typed. Leading zeros are preserved verbatim.
pub fn group_digit_run(digits: &str) -> String {
    debug_assert!(digits.chars().all(|c| c.is_ascii_digit()));

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUPING_MARK);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_grouping() {
        assert_eq!(strip_grouping(""), "");
        assert_eq!(strip_grouping("1,000"), "1000");
        assert_eq!(strip_grouping("2,500,000"), "2500000");
        // only the grouping mark is removed; junk stays for the validity check
        assert_eq!(strip_grouping("1,2x3"), "12x3");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("12x3"), "123");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("007"), "007");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(7), "7");
        assert_eq!(group_digits(70), "70");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(2_500_000), "2,500,000");
    }

    #[test]
    fn test_group_digit_run_preserves_leading_zeros() {
        assert_eq!(group_digit_run("0001234"), "0,001,234");
    }

    #[test]
    fn test_round_trip_idempotence() {
        // group(strip(group(n))) == group(n) for representative n
        for n in [0u64, 1, 70, 999, 1_000, 123_456, 2_500_000, u64::MAX] {
            let grouped = group_digits(n);
            let stripped = strip_grouping(&grouped);
            assert_eq!(group_digit_run(&stripped), grouped);
        }
    }
}
