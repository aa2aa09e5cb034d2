use destishare_types::{CategoryFilter, Destination};

/// Snapshot of everything the presentation layer renders from.
///
/// Mutated only through [`crate::App`]; there is exactly one logical owner
/// of each field and all mutation happens on the driving task.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently selected category filter.
    pub filter: CategoryFilter,

    /// Loaded collection, in the order the store returned it (plus any
    /// not-yet-refetched prepends from the submission flow).
    pub items: Vec<Destination>,

    /// A list fetch is in flight; the list is not rendered while true.
    pub loading: bool,

    /// The creation form is open.
    pub form_visible: bool,

    /// A create call is in flight; the form is disabled while true.
    pub submitting: bool,

    /// Id of the item whose vote write is in flight, if any. Only that
    /// item's voting controls are disabled; the rest stay interactive.
    pub voting: Option<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any remote operation is currently in flight.
    pub fn busy(&self) -> bool {
        self.loading || self.submitting || self.voting.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_the_contract() {
        let state = AppState::new();
        assert_eq!(state.filter, CategoryFilter::All);
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert!(!state.form_visible);
        assert!(!state.submitting);
        assert_eq!(state.voting, None);
        assert!(!state.busy());
    }
}
