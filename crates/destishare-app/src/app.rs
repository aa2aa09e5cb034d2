use destishare_client::{DestinationRepository, Error as StoreError, ListQuery};
use destishare_types::{CategoryFilter, Destination, NewDestination, VoteField};

use crate::form::DraftForm;
use crate::notice::{self, Notice};
use crate::state::AppState;

/// Token pairing a list response with the fetch that asked for it.
///
/// Rapid filter switching can leave an older `list` call in flight; only
/// the response carrying the latest ticket is applied, so a stale response
/// can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    pub query: ListQuery,
}

/// The state container: owns [`AppState`], the draft form, and the
/// repository, and is the only mutation path for all three.
pub struct App<R: DestinationRepository> {
    repo: R,
    state: AppState,
    drafts: DraftForm,
    notices: Vec<Notice>,
    fetch_seq: u64,
}

impl<R: DestinationRepository> App<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: AppState::new(),
            drafts: DraftForm::new(),
            notices: Vec::new(),
            fetch_seq: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn drafts(&self) -> &DraftForm {
        &self.drafts
    }

    pub fn drafts_mut(&mut self) -> &mut DraftForm {
        &mut self.drafts
    }

    /// Show or hide the creation form. Drafts survive the toggle.
    pub fn toggle_form(&mut self) {
        self.state.form_visible = !self.state.form_visible;
    }

    /// Take all pending user-facing notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Record a filter change and start a fetch for it: marks the list as
    /// loading and hands back the ticket the response must present.
    pub fn begin_fetch(&mut self, filter: CategoryFilter) -> FetchTicket {
        self.fetch_seq += 1;
        self.state.filter = filter.clone();
        self.state.loading = true;

        FetchTicket {
            seq: self.fetch_seq,
            query: ListQuery::new().filter(filter),
        }
    }

    /// Merge a list response into state.
    ///
    /// Stale tickets are dropped outright: a newer fetch has been issued
    /// since, and its response owns the list. On success the collection is
    /// replaced wholesale; on failure one notice fires and the previously
    /// shown items are kept (the original client discarded them, see
    /// DESIGN.md for the deliberate correction).
    ///
    /// Returns whether the response was applied.
    pub fn apply_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Destination>, StoreError>,
    ) -> bool {
        if ticket.seq != self.fetch_seq {
            return false;
        }

        self.state.loading = false;
        match result {
            Ok(items) => self.state.items = items,
            Err(_) => self.notices.push(Notice::new(notice::FETCH_FAILED)),
        }
        true
    }

    /// Switch the filter and fetch the matching destinations.
    pub async fn set_filter(&mut self, filter: CategoryFilter) {
        let ticket = self.begin_fetch(filter);
        let result = self.repo.list(ticket.query.clone()).await;
        self.apply_fetch(&ticket, result);
    }

    /// Re-fetch with the current filter (initial load and post-submit
    /// refreshes both land here).
    pub async fn refresh(&mut self) {
        self.set_filter(self.state.filter.clone()).await;
    }

    /// Submit the current drafts as a new destination.
    ///
    /// With any field empty there is no remote call and no state change.
    /// On success the stored row is prepended to the list as-is (it may sit
    /// out of vote order until the next refetch), the form closes, and the
    /// drafts reset. On failure one notice fires and the form stays open
    /// with its drafts intact.
    ///
    /// Returns the stored row if one was created.
    pub async fn submit(&mut self) -> Option<Destination> {
        if !self.drafts.is_complete() {
            return None;
        }

        let new = match NewDestination::new(
            &self.drafts.text,
            &self.drafts.source,
            &self.drafts.category,
        ) {
            Ok(new) => new,
            Err(_) => {
                self.notices.push(Notice::new(notice::CREATE_FAILED));
                return None;
            }
        };

        self.state.submitting = true;
        let result = self.repo.create(new).await;
        self.state.submitting = false;

        match result {
            Ok(stored) => {
                self.state.items.insert(0, stored.clone());
                self.state.form_visible = false;
                self.drafts.clear();
                Some(stored)
            }
            Err(_) => {
                self.notices.push(Notice::new(notice::CREATE_FAILED));
                None
            }
        }
    }

    /// Cast one vote on one item.
    ///
    /// On success only the matching item is replaced, in its original list
    /// position; every other element is untouched. On failure one notice
    /// fires and the item keeps its previous counters.
    pub async fn vote(&mut self, id: u64, field: VoteField) {
        self.state.voting = Some(id);
        let result = self.repo.increment_vote(id, field).await;
        self.state.voting = None;

        match result {
            Ok(updated) => {
                if let Some(slot) = self.state.items.iter_mut().find(|d| d.id == id) {
                    *slot = updated;
                }
            }
            Err(_) => self.notices.push(Notice::new(notice::VOTE_FAILED)),
        }
    }
}
