use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use destishare_client::{DestinationRepository, Error, ListQuery, Result};
use destishare_types::{Destination, NewDestination, VoteField};

/// In-process stand-in for the remote destinations table.
///
/// Implements the same filter/order/limit semantics the hosted service
/// applies server-side, so state-container tests observe realistic list
/// shapes. `fail_next_request` makes the following operation answer with a
/// store error, for exercising the notice paths.
pub struct MemoryStore {
    rows: Mutex<Vec<Destination>>,
    next_id: AtomicU64,
    fail_next: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn with_rows(rows: Vec<Destination>) -> Self {
        let next_id = rows.iter().map(|d| d.id + 1).max().unwrap_or(1);
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicU64::new(next_id),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next repository call fail with a store error.
    pub fn fail_next_request(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Current table contents in insertion order, for assertions.
    pub fn snapshot(&self) -> Vec<Destination> {
        self.rows.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(Error::Api {
                status: 503,
                message: "simulated outage".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl DestinationRepository for MemoryStore {
    async fn list(&self, query: ListQuery) -> Result<Vec<Destination>> {
        self.check_failure()?;

        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<Destination> = rows
            .iter()
            .filter(|d| query.category.matches(&d.category))
            .cloned()
            .collect();

        matching.sort_by_key(|d| d.votes(query.order.field));
        if query.order.descending {
            matching.reverse();
        }
        matching.truncate(query.limit);

        Ok(matching)
    }

    async fn create(&self, new: NewDestination) -> Result<Destination> {
        self.check_failure()?;

        let stored = Destination {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            text: new.text,
            source: new.source,
            category: new.category,
            votes_recommended: 0,
            votes_must_visit: 0,
            votes_not_worth_it: 0,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn increment_vote(&self, id: u64, field: VoteField) -> Result<Destination> {
        self.check_failure()?;

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::EmptyReply(format!("no destination with id {}", id)))?;

        match field {
            VoteField::Recommended => row.votes_recommended += 1,
            VoteField::MustVisit => row.votes_must_visit += 1,
            VoteField::NotWorthIt => row.votes_not_worth_it += 1,
        }
        Ok(row.clone())
    }
}
