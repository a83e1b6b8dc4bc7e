//! The card field controller.
//!
//! [`CardFieldController`] owns the form record and runs every discrete
//! input event synchronously: keystrokes in the number/name/cvv fields,
//! month and year selection, focus and blur of the number field, the
//! mask toggle, and the submit action. Hosts register a [`FieldObserver`]
//! to be notified once per field whenever that field's value changes, and
//! pull a read-only [`PreviewSnapshot`] for the card preview.
//!
//! # Example
//!
//! ```
//! use card_form::{CardFieldController, FormConfig, FormData};
//!
//! let mut form = CardFieldController::new(FormConfig::default());
//! form.initialize(FormData::default());
//!
//! form.focus_number();
//! form.input_number("4532015112830366");
//! assert_eq!(form.form().card_number, "4532 0151 1283 0366");
//!
//! form.blur_number();
//! assert_eq!(form.form().card_number, "4532 **** **** 0366");
//!
//! form.focus_number();
//! assert_eq!(form.form().card_number, "4532 0151 1283 0366");
//! ```

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::brand::BrandRule;
use crate::checksum;
use crate::expiry::{self, MonthOption};
use crate::format::format_card_number;
use crate::input::{digits_only, letters_only};
use crate::mask::mask_display;
use crate::preview::PreviewSnapshot;

/// Maximum CVV length, digits.
pub const MAX_CVV_LEN: usize = 4;

/// The five form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Card number (formatted, possibly masked display form).
    Number,
    /// Cardholder name.
    Name,
    /// Expiry month, two-digit text or empty.
    Month,
    /// Expiry year, four-digit text or empty.
    Year,
    /// CVV, up to four digits.
    Cvv,
}

impl Field {
    /// All fields, in the order the form lays them out.
    pub const ALL: [Field; 5] = [
        Field::Number,
        Field::Name,
        Field::Month,
        Field::Year,
        Field::Cvv,
    ];

    /// Stable element identifier for the field.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Number => "v-card-number",
            Self::Name => "v-card-name",
            Self::Month => "v-card-month",
            Self::Year => "v-card-year",
            Self::Cvv => "v-card-cvv",
        }
    }
}

/// The mutable form record.
///
/// `card_number` is the derived display form: grouped, and possibly
/// masked. The true digit sequence lives in the controller's private
/// cache. Contents are zeroized on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormData {
    /// Cardholder name.
    pub card_name: String,
    /// Card number, display form.
    pub card_number: String,
    /// Expiry month, `"01"`-`"12"` or empty.
    pub card_month: String,
    /// Expiry year, four digits as text, or empty.
    pub card_year: String,
    /// CVV, up to four digits.
    pub card_cvv: String,
}

impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never expose the number or CVV through debug output
        f.debug_struct("FormData")
            .field("card_name", &self.card_name)
            .field("card_number", &"***")
            .field("card_month", &self.card_month)
            .field("card_year", &self.card_year)
            .field("card_cvv", &"***")
            .finish()
    }
}

/// Host-supplied configuration, forwarded untouched to the preview.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Whether the preview picks a random background.
    pub randomize_background: bool,
    /// Background image reference, if the host supplies one.
    pub background_image: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            randomize_background: true,
            background_image: None,
        }
    }
}

/// Observer for field-change notifications.
///
/// Any `FnMut(Field, &str)` closure implements this.
pub trait FieldObserver {
    /// Called once per field whenever that field's value changes,
    /// carrying the new formatted value.
    fn field_changed(&mut self, field: Field, value: &str);
}

impl<F> FieldObserver for F
where
    F: FnMut(Field, &str),
{
    fn field_changed(&mut self, field: Field, value: &str) {
        self(field, value)
    }
}

/// The submit action's single failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The display-string checksum was not a multiple of 10.
    ChecksumMismatch,
}

impl SubmitError {
    /// The fixed user-facing message.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ChecksumMismatch => "invalid card number",
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubmitError {}

/// Controller for the credit-card entry form.
///
/// All state is confined to one instance; every method runs to
/// completion synchronously. See the module docs for the event model.
pub struct CardFieldController {
    form: FormData,
    /// Unmasked snapshot of the display string. Refreshed on every
    /// number edit and on each blur, restored on focus.
    raw_number: String,
    mask_enabled: bool,
    rule: BrandRule,
    min_card_year: u16,
    randomize_background: bool,
    background_image: Option<String>,
    now: fn() -> (u16, u8),
    observers: Vec<Box<dyn FieldObserver>>,
}

impl CardFieldController {
    /// Creates a controller with empty fields, reading the calendar from
    /// the system clock.
    pub fn new(config: FormConfig) -> Self {
        Self::with_clock(config, expiry::current_year_month)
    }

    /// Creates a controller with an explicit clock.
    ///
    /// The clock returns `(year, month)` and is consulted when computing
    /// the month constraint. Useful for deterministic hosts and tests.
    pub fn with_clock(config: FormConfig, now: fn() -> (u16, u8)) -> Self {
        let min_card_year = now().0;
        Self {
            form: FormData::default(),
            raw_number: String::new(),
            mask_enabled: true,
            rule: BrandRule::Default,
            min_card_year,
            randomize_background: config.randomize_background,
            background_image: config.background_image,
            now,
            observers: Vec::new(),
        }
    }

    /// Seeds the form and applies the one-time initial masking.
    ///
    /// The seed number is taken as-is; it is not re-formatted. Masking
    /// is applied to whatever display value is present, snapshotting it
    /// into the raw cache first.
    pub fn initialize(&mut self, seed: FormData) {
        self.form = seed;
        self.mask_enabled = true;
        self.apply_mask();
    }

    /// Registers an observer for field-change notifications.
    pub fn subscribe<O: FieldObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    /// Keystroke input in the number field.
    ///
    /// Strips non-digits, re-detects the brand rule from scratch, and
    /// regroups. The raw cache is refreshed, since edits happen while
    /// the field is unmasked.
    pub fn input_number(&mut self, raw: &str) {
        let formatted = format_card_number(raw);
        self.rule = formatted.rule;
        self.raw_number.zeroize();
        self.raw_number = formatted.display.clone();
        self.form.card_number = formatted.display;
        self.emit(Field::Number);
    }

    /// Keystroke input in the name field. Digits are stripped.
    pub fn input_name(&mut self, raw: &str) {
        self.form.card_name = letters_only(raw);
        self.emit(Field::Name);
    }

    /// Keystroke input in the CVV field. Digits only, capped at four.
    pub fn input_cvv(&mut self, raw: &str) {
        let mut cvv = digits_only(raw);
        cvv.truncate(MAX_CVV_LEN);
        self.form.card_cvv = cvv;
        self.emit(Field::Cvv);
    }

    /// Month selection changed. The value is the two-digit option text.
    pub fn select_month(&mut self, value: &str) {
        self.form.card_month = value.to_owned();
        self.emit(Field::Month);
    }

    /// Year selection changed.
    ///
    /// After the year is stored, the month constraint runs: a selected
    /// month below the new minimum is cleared to empty, not rejected.
    pub fn select_year(&mut self, value: &str) {
        self.form.card_year = value.to_owned();
        self.emit(Field::Year);

        let minimum = self.min_card_month();
        if !self.form.card_month.is_empty()
            && expiry::month_below_minimum(&self.form.card_month, minimum)
        {
            self.form.card_month.clear();
            self.emit(Field::Month);
        }
    }

    // ------------------------------------------------------------------
    // Masking state machine
    // ------------------------------------------------------------------

    /// Focus entered the number field: always restore the raw cache,
    /// regardless of the masking flag.
    pub fn focus_number(&mut self) {
        self.unmask();
    }

    /// Focus left the number field: re-apply masking if it is enabled.
    pub fn blur_number(&mut self) {
        if self.mask_enabled {
            self.apply_mask();
        }
    }

    /// Explicit toggle of the persistent masking flag.
    pub fn toggle_mask(&mut self) {
        self.mask_enabled = !self.mask_enabled;
        if self.mask_enabled {
            self.apply_mask();
        } else {
            self.unmask();
        }
    }

    fn apply_mask(&mut self) {
        self.raw_number.zeroize();
        self.raw_number = self.form.card_number.clone();
        self.form.card_number = mask_display(&self.form.card_number);
    }

    fn unmask(&mut self) {
        self.form.card_number = self.raw_number.clone();
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Runs the checksum gate over the current display string.
    ///
    /// The gate operates on the literal display value, masking and
    /// separators included; see [`crate::checksum`] for the preserved
    /// quirk. Absence of an error is the only success signal.
    pub fn submit(&self) -> Result<(), SubmitError> {
        if checksum::passes_gate(&self.form.card_number) {
            Ok(())
        } else {
            Err(SubmitError::ChecksumMismatch)
        }
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    /// The current form record.
    #[inline]
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// The rule the number field is currently classified under.
    #[inline]
    pub fn brand_rule(&self) -> BrandRule {
        self.rule
    }

    /// Length limit the host should apply to the number field,
    /// separators included.
    #[inline]
    pub fn card_number_max_length(&self) -> usize {
        self.rule.max_display_len()
    }

    /// Whether number masking is currently enabled.
    #[inline]
    pub fn is_number_masked(&self) -> bool {
        self.mask_enabled
    }

    /// The unmasked display string.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number; never log it.
    #[inline]
    pub fn unmasked_display(&self) -> &str {
        &self.raw_number
    }

    /// First year offered by the year selector.
    #[inline]
    pub fn min_card_year(&self) -> u16 {
        self.min_card_year
    }

    /// Minimum selectable month for the currently selected year.
    pub fn min_card_month(&self) -> u8 {
        expiry::min_card_month(&self.form.card_year, (self.now)())
    }

    /// Month options with their disabled flags.
    pub fn month_options(&self) -> Vec<MonthOption> {
        expiry::month_options(&self.form.card_year, (self.now)())
    }

    /// Year options offered by the form.
    pub fn year_options(&self) -> Vec<u16> {
        expiry::year_options(self.min_card_year)
    }

    /// Read-only snapshot for the preview collaborator.
    pub fn preview_snapshot(&self) -> PreviewSnapshot {
        PreviewSnapshot::new(
            self.form.clone(),
            self.mask_enabled,
            self.randomize_background,
            self.background_image.clone(),
        )
    }

    fn emit(&mut self, field: Field) {
        let value = match field {
            Field::Number => self.form.card_number.clone(),
            Field::Name => self.form.card_name.clone(),
            Field::Month => self.form.card_month.clone(),
            Field::Year => self.form.card_year.clone(),
            Field::Cvv => self.form.card_cvv.clone(),
        };
        for observer in &mut self.observers {
            observer.field_changed(field, &value);
        }
    }
}

impl fmt::Debug for CardFieldController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFieldController")
            .field("form", &self.form)
            .field("raw_number", &"***")
            .field("mask_enabled", &self.mask_enabled)
            .field("rule", &self.rule)
            .field("min_card_year", &self.min_card_year)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Drop for CardFieldController {
    fn drop(&mut self) {
        // FormData zeroizes itself; the cache is ours to clear
        self.raw_number.zeroize();
    }
}
