//! Basic card form session example.
//!
//! Run with: `cargo run --example basic`

use card_form::{format_card_number, BrandRule, CardFieldController, Field, FormConfig, FormData};

fn main() {
    println!("=== Card Form Controller ===\n");

    // Example 1: a full entry session
    let mut form = CardFieldController::new(FormConfig::default());
    form.initialize(FormData::default());
    form.subscribe(|field: Field, value: &str| {
        println!("  [{}] -> {:?}", field.id(), value);
    });

    println!("Typing a card number:");
    form.focus_number();
    let mut typed = String::new();
    for ch in "371449635398431".chars() {
        typed.push(ch);
        form.input_number(&typed);
    }
    println!();

    println!("Filling in the rest:");
    form.input_name("Jane Doe");
    form.select_year("2030");
    form.select_month("05");
    form.input_cvv("1234");
    println!();

    form.blur_number();
    println!("After blur: {}", form.form().card_number);
    form.focus_number();
    println!("After focus: {}", form.form().card_number);
    println!();

    // Example 2: brand-sensitive grouping
    println!("Grouping per brand rule:");
    let numbers = [
        ("371449635398431", "Amex"),
        ("30569309025904", "Diners Club"),
        ("4532015112830366", "Visa (default rule)"),
        ("5500000000000004", "Mastercard (default rule)"),
    ];
    for (number, description) in numbers {
        let f = format_card_number(number);
        println!("  {:20} {:22} -> {}", description, number, f.display);
    }
    println!();

    // Example 3: the display cap per rule
    println!("Display caps:");
    for rule in [BrandRule::Amex, BrandRule::Diners, BrandRule::Default] {
        println!(
            "  {:8} {} digits, {} chars displayed",
            rule.name(),
            rule.max_digits(),
            rule.max_display_len()
        );
    }
}
