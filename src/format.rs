//! Live card number formatting.
//!
//! Turns whatever is currently in the number field into the grouped
//! display form for its detected [`BrandRule`], tolerating partial input.
//! The separator is inserted eagerly: as soon as a non-final group is
//! complete, the space follows it, even before the next digit arrives.
//! This matches the original form's behavior and matters for the
//! position-based masking applied later.
//!
//! # Example
//!
//! ```
//! use card_form::format::format_card_number;
//!
//! assert_eq!(format_card_number("371449635398431").display, "3714 496353 98431");
//! assert_eq!(format_card_number("4532015112830366").display, "4532 0151 1283 0366");
//!
//! // Partial input, eager separator
//! assert_eq!(format_card_number("3714").display, "3714 ");
//! assert_eq!(format_card_number("37144").display, "3714 4");
//! ```

use crate::brand::BrandRule;
use crate::input::digits_only;

/// Separator inserted between digit groups.
pub const SEPARATOR: char = ' ';

/// Result of formatting the number field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedNumber {
    /// The grouped display string.
    pub display: String,
    /// The rule the input was classified under.
    pub rule: BrandRule,
}

impl FormattedNumber {
    /// Maximum display length (digits plus separators) for the rule.
    #[inline]
    pub fn max_display_len(&self) -> usize {
        self.rule.max_display_len()
    }
}

/// Formats raw number-field input into its grouped display form.
///
/// Non-digit characters are stripped, the brand rule is detected from the
/// digit prefix, digits beyond the rule's cap are dropped, and a single
/// space is inserted after each completed non-final group.
pub fn format_card_number(input: &str) -> FormattedNumber {
    let mut digits = digits_only(input);
    let rule = BrandRule::detect(&digits);
    digits.truncate(rule.max_digits());

    let groups = rule.group_sizes();
    let mut display = String::with_capacity(rule.max_display_len());
    let mut pos = 0;

    for (i, &size) in groups.iter().enumerate() {
        if pos >= digits.len() {
            break;
        }
        let end = (pos + size).min(digits.len());
        display.push_str(&digits[pos..end]);
        let complete = end - pos == size;
        pos = end;
        if complete && i + 1 < groups.len() {
            display.push(SEPARATOR);
        }
    }

    FormattedNumber { display, rule }
}
