//! Read-only state handed to the card preview collaborator.
//!
//! The preview renders the visual card from whatever the controller
//! currently holds; nothing flows back. Background-selection parameters
//! arrive with the form configuration and are passed through untouched.

use crate::controller::{Field, FormData};

/// One-directional snapshot for the preview renderer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreviewSnapshot {
    /// Current field values, exactly as displayed (the number may carry
    /// masking).
    pub values: FormData,
    /// Stable element identifiers for the five fields, in
    /// [`Field::ALL`] order.
    pub field_ids: [&'static str; 5],
    /// Whether number masking is currently enabled.
    pub is_number_masked: bool,
    /// Whether the preview should pick a random background.
    pub randomize_background: bool,
    /// Host-supplied background image reference, if any.
    pub background_image: Option<String>,
}

impl PreviewSnapshot {
    pub(crate) fn new(
        values: FormData,
        is_number_masked: bool,
        randomize_background: bool,
        background_image: Option<String>,
    ) -> Self {
        Self {
            values,
            field_ids: Field::ALL.map(|f| f.id()),
            is_number_masked,
            randomize_background,
            background_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_order() {
        let snapshot = PreviewSnapshot::new(FormData::default(), true, false, None);
        assert_eq!(
            snapshot.field_ids,
            [
                "v-card-number",
                "v-card-name",
                "v-card-month",
                "v-card-year",
                "v-card-cvv",
            ]
        );
    }

    #[test]
    fn test_background_passthrough() {
        let snapshot =
            PreviewSnapshot::new(FormData::default(), true, true, Some("art-07".into()));
        assert!(snapshot.randomize_background);
        assert_eq!(snapshot.background_image.as_deref(), Some("art-07"));
    }
}
