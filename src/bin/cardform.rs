//! CLI tool for the card form controller.
//!
//! # Usage
//!
//! ```bash
//! # Format number-field input
//! cardform format 371449635398431
//!
//! # Apply positional display masking
//! cardform mask "3714 496353 98431"
//!
//! # Run the submission gate on a display string
//! cardform gate "4532015112830366"
//!
//! # Conventional Luhn check over the digits
//! cardform luhn "4532 0151 1283 0366"
//!
//! # Month options for a selected year
//! cardform months --year 2026
//! ```

use card_form::{checksum, expiry, format, mask, BrandRule};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(version, about = "Credit card entry-form formatting and masking tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw number-field input
    Format {
        /// Raw input (non-digits are stripped)
        input: String,
    },

    /// Mask a display string at positions 5..=13
    Mask {
        /// Display string to mask
        display: String,
    },

    /// Run the submission checksum gate on a display string
    Gate {
        /// Display string, exactly as it would be submitted
        display: String,
    },

    /// Conventional Luhn check over the digits of the input
    Luhn {
        /// Card number (separators allowed)
        input: String,
    },

    /// List month options for a selected year
    Months {
        /// Selected year (four digits)
        #[arg(short, long, default_value = "")]
        year: String,
    },

    /// Detect the brand rule for a digit prefix
    Detect {
        /// Card number or partial number
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { input } => cmd_format(&input),
        Commands::Mask { display } => cmd_mask(&display),
        Commands::Gate { display } => cmd_gate(&display),
        Commands::Luhn { input } => cmd_luhn(&input),
        Commands::Months { year } => cmd_months(&year),
        Commands::Detect { input } => cmd_detect(&input),
    }
}

fn cmd_format(input: &str) {
    let formatted = format::format_card_number(input);
    println!("Display: {:?}", formatted.display);
    println!("Rule: {}", formatted.rule);
    println!("Max Length: {}", formatted.max_display_len());
}

fn cmd_mask(display: &str) {
    println!("{}", mask::mask_display(display));
}

fn cmd_gate(display: &str) {
    match checksum::display_checksum(display) {
        Some(sum) if sum % 10 == 0 => {
            println!("Gate: PASS (sum {})", sum);
            std::process::exit(0);
        }
        Some(sum) => {
            println!("Gate: FAIL (sum {})", sum);
            std::process::exit(1);
        }
        None => {
            println!("Gate: FAIL (undefined sum)");
            std::process::exit(1);
        }
    }
}

fn cmd_luhn(input: &str) {
    if checksum::luhn(input) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

fn cmd_months(year: &str) {
    let now = expiry::current_year_month();
    for option in expiry::month_options(year, now) {
        if option.disabled {
            println!("{} (disabled)", option.value);
        } else {
            println!("{}", option.value);
        }
    }
}

fn cmd_detect(input: &str) {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let rule = BrandRule::detect(&digits);
    println!("Rule: {}", rule);
    println!("Grouping: {:?}", rule.group_sizes());
    println!("Max Digits: {}", rule.max_digits());
    println!("Max Display Length: {}", rule.max_display_len());
}
