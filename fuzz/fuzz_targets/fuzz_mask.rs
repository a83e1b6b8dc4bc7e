//! Fuzz target for display masking.
//!
//! Tests that masking never panics and never changes string shape.

#![no_main]

use card_form::mask_display;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let masked = mask_display(data);
    assert_eq!(masked.chars().count(), data.chars().count());

    // Masking only ever replaces non-whitespace characters with '*'
    for (a, b) in data.chars().zip(masked.chars()) {
        if a != b {
            assert_eq!(b, '*');
            assert!(!a.is_whitespace());
        }
    }

    // Idempotent: masking a masked string changes nothing
    assert_eq!(mask_display(&masked), masked);
});
