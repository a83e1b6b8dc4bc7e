//! Fuzz target driving the controller with arbitrary event sequences.
//!
//! Tests that no ordering of input events panics, and that the
//! mask/unmask round trip holds under any interleaving.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{CardFieldController, FormConfig, FormData};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Event {
    Number(String),
    Name(String),
    Month(String),
    Year(String),
    Cvv(String),
    Focus,
    Blur,
    Toggle,
    Submit,
}

fuzz_target!(|events: Vec<Event>| {
    fn fixed_clock() -> (u16, u8) {
        (2026, 8)
    }

    let mut form = CardFieldController::with_clock(FormConfig::default(), fixed_clock);
    form.initialize(FormData::default());

    for event in events {
        match event {
            Event::Number(s) => form.input_number(&s),
            Event::Name(s) => form.input_name(&s),
            Event::Month(s) => form.select_month(&s),
            Event::Year(s) => form.select_year(&s),
            Event::Cvv(s) => form.input_cvv(&s),
            Event::Focus => form.focus_number(),
            Event::Blur => form.blur_number(),
            Event::Toggle => form.toggle_mask(),
            Event::Submit => {
                let _ = form.submit();
            }
        }
    }

    // Whatever happened, focusing must surface the unmasked display
    form.focus_number();
    assert_eq!(form.form().card_number, form.unmasked_display());
    let _ = form.preview_snapshot();
});
