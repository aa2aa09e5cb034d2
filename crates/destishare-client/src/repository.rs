use destishare_types::{Destination, NewDestination, VoteField};

use crate::error::Result;
use crate::query::ListQuery;

/// The three operations the view layer needs from the remote table.
///
/// Implementations: [`crate::RestStore`] in production, `MemoryStore` in
/// `destishare-testing`. The seam exists so the state container can be
/// exercised without a network.
pub trait DestinationRepository {
    /// Fetch destinations matching the query. An empty result set is a
    /// valid, non-error outcome.
    fn list(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Destination>>> + Send;

    /// Insert a validated record and return the stored row with its
    /// assigned id. Callers guarantee the presence checks already ran.
    fn create(&self, new: NewDestination) -> impl Future<Output = Result<Destination>> + Send;

    /// Bump one vote counter by one and return the updated row.
    ///
    /// Read-modify-write: concurrent increments from different clients are
    /// last-write-wins at the store, and no retry happens here.
    fn increment_vote(
        &self,
        id: u64,
        field: VoteField,
    ) -> impl Future<Output = Result<Destination>> + Send;
}
