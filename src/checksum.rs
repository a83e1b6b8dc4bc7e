//! Submission checksum gate.
//!
//! Two checks live here. [`luhn`] is the conventional checksum over the
//! digit sequence. [`passes_gate`] is what the submit action actually
//! runs: the same parity-weighted sum, but iterated over the *literal
//! display string*, characters alternating the parity flag — separators
//! and mask characters included. Spaces coerce to zero (and still shift
//! the parity of everything to their left); any other non-digit poisons
//! the sum and the gate fails. This reproduces the original form's
//! observed behavior, which is a latent defect kept deliberately: a
//! masked display can never pass, and a separator-bearing display fails
//! even when its digits are valid. Hosts that want the correct check run
//! [`luhn`] on the raw digits.
//!
//! # Example
//!
//! ```
//! use card_form::checksum::{luhn, passes_gate};
//!
//! // Conventional check over digits
//! assert!(luhn("4532015112830366"));
//! assert!(!luhn("4532015112830367"));
//!
//! // The gate agrees on separator-free input...
//! assert!(passes_gate("4532015112830366"));
//! // ...but spaces shift the alternation and masked digits poison it
//! assert!(!passes_gate("4532 0151 1283 0366"));
//! assert!(!passes_gate("4532 **** **** 0366"));
//! ```

/// Doubled-digit lookup: double the value, digit-sum anything above 9.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Conventional Luhn check over the digits of `input`.
///
/// Non-digit characters are stripped first. An empty digit sequence
/// fails.
pub fn luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    luhn_digits(&digits)
}

/// Conventional Luhn check over a digit slice.
#[inline]
pub fn luhn_digits(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    for (i, &d) in digits.iter().rev().enumerate() {
        if i % 2 == 1 {
            sum += DOUBLE_TABLE[d as usize] as u32;
        } else {
            sum += d as u32;
        }
    }
    sum % 10 == 0
}

/// The parity-weighted character sum the submit gate runs on a display
/// string.
///
/// Characters are visited last to first; the alternating flag starts
/// true at the last character and flips on *every* character. Digits
/// contribute their value, whitespace contributes zero, and any other
/// character (the mask character included) makes the whole sum undefined,
/// returned as `None`.
pub fn display_checksum(display: &str) -> Option<u32> {
    let mut sum: u32 = 0;
    let mut odd = true;

    for c in display.chars().rev() {
        let value = match c.to_digit(10) {
            Some(d) => d,
            None if c.is_whitespace() => 0,
            None => return None,
        };

        if odd {
            sum += value;
        } else {
            let mut doubled = value * 2;
            if doubled > 9 {
                doubled = doubled / 10 + doubled % 10;
            }
            sum += doubled;
        }
        odd = !odd;
    }

    Some(sum)
}

/// The submit gate: true when the display-string sum is a multiple of 10.
///
/// An undefined sum fails. An empty display sums to zero and passes,
/// exactly as the original form did.
#[inline]
pub fn passes_gate(display: &str) -> bool {
    match display_checksum(display) {
        Some(sum) => sum % 10 == 0,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_valid_numbers() {
        assert!(luhn("4532015112830366"));
        assert!(luhn("371449635398431"));
        assert!(luhn("4111111111111111"));
        assert!(luhn("30569309025904"));
    }

    #[test]
    fn test_luhn_invalid_numbers() {
        assert!(!luhn("4532015112830367"));
        assert!(!luhn("4111111111111112"));
        assert!(!luhn(""));
        assert!(!luhn("abc"));
    }

    #[test]
    fn test_luhn_ignores_separators() {
        assert!(luhn("4532 0151 1283 0366"));
        assert!(luhn("3714 496353 98431"));
    }

    #[test]
    fn test_luhn_digits() {
        assert!(luhn_digits(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(!luhn_digits(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!luhn_digits(&[]));
        assert!(luhn_digits(&[0]));
    }

    #[test]
    fn test_gate_digit_only_matches_luhn() {
        assert!(passes_gate("4532015112830366"));
        assert!(!passes_gate("4532015112830367"));
    }

    #[test]
    fn test_gate_separators_shift_parity() {
        // both digit sequences are Luhn-valid; the inserted spaces move
        // every digit left of them to the opposite parity slot
        assert_eq!(display_checksum("4532 0151 1283 0366"), Some(46));
        assert_eq!(display_checksum("3714 496353 98431"), Some(71));
        assert!(!passes_gate("4532 0151 1283 0366"));
        assert!(!passes_gate("3714 496353 98431"));
    }

    #[test]
    fn test_gate_masked_display_always_fails() {
        assert_eq!(display_checksum("4532 **** **** 0366"), None);
        assert!(!passes_gate("4532 **** **** 0366"));
        assert!(!passes_gate("3714 ****** **431"));
    }

    #[test]
    fn test_gate_empty_display_passes() {
        assert_eq!(display_checksum(""), Some(0));
        assert!(passes_gate(""));
    }

    #[test]
    fn test_gate_whitespace_is_zero_valued() {
        // a lone trailing space occupies the first (odd) slot
        assert_eq!(display_checksum("4532 "), display_checksum("45320"));
    }

    #[test]
    fn test_double_table() {
        for d in 0..10u8 {
            let doubled = d * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[d as usize], expected);
        }
    }
}
