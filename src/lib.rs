//! # card_form
//!
//! Controller for a credit-card entry form: live brand-aware number
//! formatting, reversible display masking, expiry month/year
//! constraining, and a checksum gate on submission. The visual card
//! preview is an external collaborator that receives a read-only
//! snapshot and emits nothing back.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{CardFieldController, Field, FormConfig, FormData};
//!
//! let mut form = CardFieldController::new(FormConfig::default());
//! form.initialize(FormData::default());
//!
//! // Hosts get one notification per field change
//! form.subscribe(|field: Field, value: &str| {
//!     let _ = (field, value);
//! });
//!
//! // Typing in the number field: grouped per detected brand rule
//! form.focus_number();
//! form.input_number("371449635398431");
//! assert_eq!(form.form().card_number, "3714 496353 98431");
//! assert_eq!(form.card_number_max_length(), 17);
//!
//! // Leaving the field masks display positions 5..=13
//! form.blur_number();
//! assert_eq!(form.form().card_number, "3714 ****** **431");
//!
//! // Focus restores the exact pre-mask display string
//! form.focus_number();
//! assert_eq!(form.form().card_number, "3714 496353 98431");
//! ```
//!
//! ## Formatting Rules
//!
//! | Rule | Prefix | Digits | Grouping | Max display |
//! |------|--------|--------|----------|-------------|
//! | American Express | 34, 37 | 15 | 4-6-5 | 17 |
//! | Diners Club | 300-305, 36, 38 | 14 | 4-6-4 | 16 |
//! | Default | everything else | 16 | 4-4-4-4 | 19 |
//!
//! ## The Submission Gate
//!
//! The submit action checksums the *literal display string*, separators
//! and mask characters included — a preserved quirk of the original
//! form, documented in [`checksum`]. The conventional digit-sequence
//! check is available as [`checksum::luhn`]:
//!
//! ```rust
//! use card_form::checksum;
//!
//! assert!(checksum::luhn("3714 496353 98431"));
//! assert!(checksum::passes_gate("4532015112830366"));
//! assert!(!checksum::passes_gate("4532 **** **** 0366"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize form data and preview snapshots |
//! | `cli` | `cardform` command-line tool |
//!
//! ## Security
//!
//! - The unmasked number cache and form record are zeroized on drop
//! - `Debug` output never exposes the card number or CVV

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod checksum;
pub mod controller;
pub mod expiry;
pub mod format;
pub mod input;
pub mod mask;
pub mod preview;

// Re-export main types at crate root
pub use brand::BrandRule;
pub use controller::{
    CardFieldController, Field, FieldObserver, FormConfig, FormData, SubmitError, MAX_CVV_LEN,
};
pub use expiry::MonthOption;
pub use format::{format_card_number, FormattedNumber};
pub use mask::mask_display;
pub use preview::PreviewSnapshot;
