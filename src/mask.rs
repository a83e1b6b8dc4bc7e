//! Positional display masking.
//!
//! Masking operates on *display character positions*, not logical digit
//! indices: positions 5 through 13 inclusive of the grouped display string
//! are overwritten with the mask character, and a position is skipped only
//! when it holds a blank. A separator that happens to fall inside the
//! range would be overwritten too; with the standard groupings the space
//! at position 4 always survives and the Amex/Diners one at position 11
//! is preserved as a blank.
//!
//! The controller snapshots the unmasked display string before masking so
//! the operation is reversible; this module is the pure transform.
//!
//! # Example
//!
//! ```
//! use card_form::mask::mask_display;
//!
//! assert_eq!(mask_display("4532 0151 1283 0366"), "4532 **** **** 0366");
//! assert_eq!(mask_display("3714 496353 98431"), "3714 ****** **431");
//! ```

/// Character written over masked positions.
pub const MASK_CHAR: char = '*';

/// First display position that gets masked (0-indexed).
pub const MASK_FROM: usize = 5;

/// Last display position that gets masked (0-indexed, inclusive).
pub const MASK_TO: usize = 13;

/// Returns the display string with positions 5..=13 masked.
///
/// Blanks inside the range are left alone; everything outside the range
/// is untouched. Total over any input, including strings shorter than
/// the masked range.
pub fn mask_display(display: &str) -> String {
    display
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (MASK_FROM..=MASK_TO).contains(&i) && !c.is_whitespace() {
                MASK_CHAR
            } else {
                c
            }
        })
        .collect()
}

/// True if the string contains the mask character.
///
/// The display value alone is enough to tell whether masking has been
/// applied, since `*` can never come from digit input.
#[inline]
pub fn is_masked(display: &str) -> bool {
    display.contains(MASK_CHAR)
}
