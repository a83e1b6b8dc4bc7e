//! Expiry month/year constraint.
//!
//! The form offers a fixed window of years starting at the year the
//! controller was created, and disables months that are already in the
//! past when the selected year is the current one. The constraint is
//! one-way: it is evaluated when the year changes, and a violating month
//! selection is cleared, never rejected.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{min_card_month, month_below_minimum};
//!
//! // August 2026: selecting 2026 disables months 1-7
//! assert_eq!(min_card_month("2026", (2026, 8)), 8);
//! assert_eq!(min_card_month("2027", (2026, 8)), 1);
//!
//! assert!(month_below_minimum("03", 8));
//! assert!(!month_below_minimum("08", 8));
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

/// How many year options the form offers.
pub const YEAR_WINDOW: u16 = 12;

/// A selectable month option for the host UI.
///
/// Disabled options stay in the list; the host renders them inert.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthOption {
    /// Two-digit option value, `"01"` through `"12"`.
    pub value: String,
    /// Whether the option is below the minimum allowed month.
    pub disabled: bool,
}

/// Formats a month number as its two-digit option value.
#[inline]
pub fn month_value(n: u8) -> String {
    format!("{:02}", n)
}

/// Minimum selectable month for a year selection.
///
/// Equals the current calendar month when `card_year` is the current
/// year, otherwise 1. `now` is `(year, month)`; `card_year` is the raw
/// field text (empty or unparsable never matches the current year).
pub fn min_card_month(card_year: &str, now: (u16, u8)) -> u8 {
    match card_year.parse::<u16>() {
        Ok(year) if year == now.0 => now.1,
        _ => 1,
    }
}

/// Compares a raw month selection against the minimum.
///
/// The raw text is coerced numerically; empty or unparsable values count
/// as zero and therefore sit below any minimum above 1.
pub fn month_below_minimum(card_month: &str, minimum: u8) -> bool {
    card_month.parse::<u8>().unwrap_or(0) < minimum
}

/// The twelve month options for a year selection.
pub fn month_options(card_year: &str, now: (u16, u8)) -> Vec<MonthOption> {
    let minimum = min_card_month(card_year, now);
    (1..=12)
        .map(|n| MonthOption {
            value: month_value(n),
            disabled: n < minimum,
        })
        .collect()
}

/// The year options offered by the form: `min_year` and the following
/// eleven years.
pub fn year_options(min_year: u16) -> Vec<u16> {
    (min_year..min_year + YEAR_WINDOW).collect()
}

/// Current `(year, month)` derived from the system clock.
///
/// Month boundaries are approximated from the day of year, which is
/// accurate enough for gating a card expiry picker.
pub fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days = secs / 86400;
    let years = days / 365;
    let year = 1970 + years as u16;

    let day_of_year = days % 365;
    let month = (day_of_year / 30).min(11) as u8 + 1;

    (year, month)
}
