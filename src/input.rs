//! Keystroke-level input sanitization.
//!
//! The original form filtered keystrokes at the input-binding layer; here
//! the filters are plain functions applied before any formatting, so they
//! work independently of any UI event mechanism.
//!
//! Both functions are total: malformed input is stripped, never rejected.

/// Keeps only ASCII digits.
///
/// Applied to the card number and CVV fields.
///
/// # Example
///
/// ```
/// use card_form::input::digits_only;
///
/// assert_eq!(digits_only("4111 1111"), "41111111");
/// assert_eq!(digits_only("12ab34"), "1234");
/// ```
#[inline]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Drops ASCII digits, keeping everything else.
///
/// Applied to the cardholder name field. Only digits are filtered;
/// spaces, punctuation, and non-ASCII letters pass through, matching the
/// original's key filter.
///
/// # Example
///
/// ```
/// use card_form::input::letters_only;
///
/// assert_eq!(letters_only("Jane Doe 3rd"), "Jane Doe rd");
/// ```
#[inline]
pub fn letters_only(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_digit()).collect()
}
