//! Brand rule detection from leading digits.
//!
//! A [`BrandRule`] is the card-issuer-specific grouping and length policy
//! applied while the user types. It is recomputed from scratch on every
//! number edit; no state is carried between rules.
//!
//! Detection priority (first match wins):
//!
//! 1. `34` / `37` → American Express
//! 2. `300`–`305`, `36`, `38` → Diners Club
//! 3. anything else → the default 16-digit rule
//!
//! # Example
//!
//! ```
//! use card_form::BrandRule;
//!
//! assert_eq!(BrandRule::detect("371449635398431"), BrandRule::Amex);
//! assert_eq!(BrandRule::detect("30569309025904"), BrandRule::Diners);
//! assert_eq!(BrandRule::detect("4532015112830366"), BrandRule::Default);
//! ```

use std::fmt;

/// Grouping and length policy inferred from a number's leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrandRule {
    /// American Express: 15 digits, grouped 4-6-5, display capped at 17.
    Amex,
    /// Diners Club: 14 digits, grouped 4-6-4, display capped at 16.
    Diners,
    /// Everything else: up to 16 digits, grouped 4-4-4-4, display capped at 19.
    #[default]
    Default,
}

impl BrandRule {
    /// Detects the rule for a digit-only string.
    ///
    /// Partial input is fine: two leading digits are enough to commit to
    /// Amex, three to Diners' `300`–`305` range.
    #[inline]
    pub fn detect(digits: &str) -> Self {
        match digits.as_bytes() {
            [b'3', b'4', ..] | [b'3', b'7', ..] => Self::Amex,
            [b'3', b'6', ..] | [b'3', b'8', ..] => Self::Diners,
            [b'3', b'0', b'0'..=b'5', ..] => Self::Diners,
            _ => Self::Default,
        }
    }

    /// Digit group sizes used for display formatting.
    #[inline]
    pub const fn group_sizes(&self) -> &'static [usize] {
        match self {
            Self::Amex => &[4, 6, 5],
            Self::Diners => &[4, 6, 4],
            Self::Default => &[4, 4, 4, 4],
        }
    }

    /// Maximum number of significant digits accepted for this rule.
    #[inline]
    pub const fn max_digits(&self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Diners => 14,
            Self::Default => 16,
        }
    }

    /// Maximum display length, counting inserted separators.
    ///
    /// Hosts should apply this as the input field's length limit.
    #[inline]
    pub const fn max_display_len(&self) -> usize {
        match self {
            Self::Amex => 17,
            Self::Diners => 16,
            Self::Default => 19,
        }
    }

    /// Human-readable rule name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Amex => "American Express",
            Self::Diners => "Diners Club",
            Self::Default => "Default",
        }
    }
}

impl fmt::Display for BrandRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
