use destishare_app::DraftForm;
use destishare_types::{CategoryFilter, KNOWN_CATEGORIES};

/// Filter tabs: "all" plus the six known categories.
pub const FILTER_TAB_COUNT: usize = 1 + KNOWN_CATEGORIES.len();

/// Which creation-form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Source,
    Category,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Text => FormField::Source,
            FormField::Source => FormField::Category,
            FormField::Category => FormField::Text,
        }
    }
}

/// Purely presentational state: selection, tab position, focus, status
/// line. Everything the store owns lives in `destishare_app::AppState`.
pub struct UiState {
    pub selected: usize,
    pub filter_index: usize,
    pub focus: FormField,
    pub status: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            filter_index: 0,
            focus: FormField::Text,
            status: None,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        filter_at(self.filter_index)
    }

    /// Move the filter tab left or right, wrapping at the ends.
    pub fn shift_filter(&mut self, delta: isize) {
        let count = FILTER_TAB_COUNT as isize;
        let next = (self.filter_index as isize + delta).rem_euclid(count);
        self.filter_index = next as usize;
    }

    /// Keep the selection inside the list after the collection changed.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn insert_char(&self, drafts: &mut DraftForm, c: char) {
        match self.focus {
            FormField::Text => drafts.text.push(c),
            FormField::Source => drafts.source.push(c),
            // The category field is a picker, not free text
            FormField::Category => {}
        }
    }

    pub fn backspace(&self, drafts: &mut DraftForm) {
        match self.focus {
            FormField::Text => {
                drafts.text.pop();
            }
            FormField::Source => {
                drafts.source.pop();
            }
            FormField::Category => drafts.category.clear(),
        }
    }

    /// Step the draft category through the known set. An unset draft starts
    /// at the first (or last) category.
    pub fn cycle_category(&self, drafts: &mut DraftForm, delta: isize) {
        if self.focus != FormField::Category {
            return;
        }

        let count = KNOWN_CATEGORIES.len() as isize;
        let current = KNOWN_CATEGORIES
            .iter()
            .position(|c| c.name() == drafts.category);

        let next = match current {
            Some(index) => (index as isize + delta).rem_euclid(count),
            None if delta > 0 => 0,
            None => count - 1,
        };
        drafts.category = KNOWN_CATEGORIES[next as usize].name().to_string();
    }
}

/// Map a tab index to its filter; index 0 is "all".
pub fn filter_at(index: usize) -> CategoryFilter {
    if index == 0 {
        CategoryFilter::All
    } else {
        CategoryFilter::Only(KNOWN_CATEGORIES[index - 1].clone())
    }
}
