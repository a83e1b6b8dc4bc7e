//! Display masking and submission gate example.
//!
//! Run with: `cargo run --example masking`

use card_form::{checksum, mask_display, CardFieldController, FormConfig, FormData};

fn main() {
    println!("=== Display Masking ===\n");

    // Example 1: the positional mask window
    println!("Masked displays:");
    let displays = [
        "4532 0151 1283 0366",
        "3714 496353 98431",
        "3056 930902 5904",
        "4532015112830366",
    ];
    for display in displays {
        println!("  {:22} -> {}", display, mask_display(display));
    }
    println!();

    // Example 2: the mask state machine
    let mut form = CardFieldController::new(FormConfig::default());
    form.initialize(FormData::default());
    form.input_number("4532015112830366");

    form.blur_number();
    println!("Blurred:  {}", form.form().card_number);
    form.focus_number();
    println!("Focused:  {}", form.form().card_number);
    form.blur_number();
    form.toggle_mask();
    println!("Toggled:  {}", form.form().card_number);
    form.toggle_mask();
    println!("Restored: {}", form.form().card_number);
    println!();

    // Example 3: the submission gate runs on the display string
    println!("Submission gate:");
    let inputs = [
        "4532015112830366",
        "4532 0151 1283 0366",
        "4532 **** **** 0366",
        "4532015112830367",
    ];
    for input in inputs {
        let sum = checksum::display_checksum(input);
        println!(
            "  {:22} sum={:10} gate={}",
            input,
            sum.map_or("poisoned".to_owned(), |s| s.to_string()),
            if checksum::passes_gate(input) {
                "PASS"
            } else {
                "FAIL"
            }
        );
    }
}
