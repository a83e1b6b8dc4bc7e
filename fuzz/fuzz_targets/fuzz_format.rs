//! Fuzz target for card number formatting.
//!
//! Tests that formatting never panics on arbitrary input.

#![no_main]

use card_form::{format_card_number, input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = input::digits_only(data);
    let _ = input::letters_only(data);

    let formatted = format_card_number(data);
    assert!(formatted.display.len() <= formatted.max_display_len());

    // Formatting its own output must be a fixed point
    let again = format_card_number(&formatted.display);
    assert_eq!(formatted.display, again.display);
    assert_eq!(formatted.rule, again.rule);
});
