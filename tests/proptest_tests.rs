//! Property-based tests using proptest.
//!
//! These check invariants over arbitrary inputs rather than fixed
//! vectors: the formatter's output alphabet, masking round trips, and
//! the never-panic guarantee on hostile input.

use proptest::prelude::*;

use card_form::{
    checksum, format_card_number, mask_display, CardFieldController, FormConfig, FormData,
};

fn fixed_clock() -> (u16, u8) {
    (2026, 8)
}

fn fresh_controller() -> CardFieldController {
    let mut form = CardFieldController::with_clock(FormConfig::default(), fixed_clock);
    form.initialize(FormData::default());
    form
}

proptest! {
    // ------------------------------------------------------------------
    // Formatter
    // ------------------------------------------------------------------

    #[test]
    fn prop_format_output_alphabet(input in ".*") {
        let f = format_card_number(&input);
        prop_assert!(f.display.chars().all(|c| c.is_ascii_digit() || c == ' '));
    }

    #[test]
    fn prop_format_is_idempotent(input in ".*") {
        let once = format_card_number(&input);
        let twice = format_card_number(&once.display);
        prop_assert_eq!(&once.display, &twice.display);
        prop_assert_eq!(once.rule, twice.rule);
    }

    #[test]
    fn prop_format_respects_display_cap(digits in "[0-9]{0,40}") {
        let f = format_card_number(&digits);
        prop_assert!(f.display.len() <= f.max_display_len());
    }

    #[test]
    fn prop_format_preserves_digit_prefix(digits in "[0-9]{0,40}") {
        let f = format_card_number(&digits);
        let kept: String = f.display.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert!(digits.starts_with(&kept));
    }

    #[test]
    fn prop_format_groups_never_oversized(digits in "[0-9]{0,19}") {
        let f = format_card_number(&digits);
        let sizes = f.rule.group_sizes();
        for (i, group) in f.display.split(' ').enumerate() {
            prop_assert!(group.len() <= sizes[i]);
        }
    }

    // ------------------------------------------------------------------
    // Masking
    // ------------------------------------------------------------------

    #[test]
    fn prop_mask_preserves_length_and_whitespace(input in ".{0,30}") {
        let masked = mask_display(&input);
        prop_assert_eq!(masked.chars().count(), input.chars().count());
        for (a, b) in input.chars().zip(masked.chars()) {
            prop_assert_eq!(a.is_whitespace(), b.is_whitespace());
        }
    }

    #[test]
    fn prop_mask_touches_only_window(digits in "[0-9]{0,19}") {
        let f = format_card_number(&digits);
        let masked = mask_display(&f.display);
        for (i, (a, b)) in f.display.chars().zip(masked.chars()).enumerate() {
            if a != b {
                prop_assert_eq!(b, '*');
                prop_assert!((5..=13).contains(&i));
            }
        }
    }

    #[test]
    fn prop_controller_mask_round_trip(digits in "[0-9]{0,19}") {
        let mut form = fresh_controller();
        form.input_number(&digits);
        let before = form.form().card_number.clone();
        form.blur_number();
        form.focus_number();
        prop_assert_eq!(&form.form().card_number, &before);
    }

    #[test]
    fn prop_toggle_twice_is_identity(digits in "[0-9]{0,19}") {
        let mut form = fresh_controller();
        form.input_number(&digits);
        form.blur_number();
        let before = form.form().card_number.clone();
        form.toggle_mask();
        form.toggle_mask();
        prop_assert_eq!(&form.form().card_number, &before);
    }

    // ------------------------------------------------------------------
    // Checksum gate
    // ------------------------------------------------------------------

    #[test]
    fn prop_gate_never_panics(input in ".*") {
        let _ = checksum::passes_gate(&input);
        let _ = checksum::display_checksum(&input);
        let _ = checksum::luhn(&input);
    }

    #[test]
    fn prop_gate_rejects_any_masked_display(digits in "[0-9]{6,19}") {
        // a masked display always contains '*', which poisons the sum
        let f = format_card_number(&digits);
        let masked = mask_display(&f.display);
        prop_assume!(masked.contains('*'));
        prop_assert!(!checksum::passes_gate(&masked));
        prop_assert_eq!(checksum::display_checksum(&masked), None);
    }

    #[test]
    fn prop_gate_agrees_with_luhn_on_plain_digits(digits in "[0-9]{1,19}") {
        // no separators, no masking: the gate is exactly the digit check
        prop_assert_eq!(checksum::passes_gate(&digits), checksum::luhn(&digits));
    }

    // ------------------------------------------------------------------
    // Controller never panics
    // ------------------------------------------------------------------

    #[test]
    fn prop_controller_survives_arbitrary_input(
        number in ".{0,40}",
        name in ".{0,40}",
        month in ".{0,6}",
        year in ".{0,6}",
        cvv in ".{0,10}",
    ) {
        let mut form = fresh_controller();
        form.input_number(&number);
        form.input_name(&name);
        form.select_month(&month);
        form.select_year(&year);
        form.input_cvv(&cvv);
        form.blur_number();
        form.focus_number();
        form.toggle_mask();
        let _ = form.submit();
        let _ = form.month_options();
        let _ = form.year_options();
        let _ = form.preview_snapshot();
    }
}
