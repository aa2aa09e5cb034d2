/// Ephemeral input buffers for the creation form.
///
/// Cleared on successful submission only. Closing the form without
/// submitting keeps the drafts, matching the original client (re-opening
/// the form shows what was typed before).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub text: String,
    pub source: String,
    pub category: String,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presence check gating the submission flow: all three fields must be
    /// non-empty (whitespace does not count).
    pub fn is_complete(&self) -> bool {
        !self.text.trim().is_empty()
            && !self.source.trim().is_empty()
            && !self.category.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.source.clear();
        self.category.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_drafts_are_incomplete() {
        assert!(!DraftForm::new().is_complete());
    }

    #[test]
    fn whitespace_only_fields_do_not_count_as_present() {
        let draft = DraftForm {
            text: "Kyoto".to_string(),
            source: "   ".to_string(),
            category: "culture".to_string(),
        };
        assert!(!draft.is_complete());
    }

    #[test]
    fn all_three_fields_present_is_complete() {
        let draft = DraftForm {
            text: "Kyoto".to_string(),
            source: "https://example.com".to_string(),
            category: "culture".to_string(),
        };
        assert!(draft.is_complete());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = DraftForm {
            text: "Kyoto".to_string(),
            source: "https://example.com".to_string(),
            category: "culture".to_string(),
        };
        draft.clear();
        assert_eq!(draft, DraftForm::new());
    }
}
