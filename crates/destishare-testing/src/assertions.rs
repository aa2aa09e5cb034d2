//! Assertion helpers shared by state and client tests.

use destishare_types::{Destination, VoteField};

/// Assert the collection is ordered descending by recommendation votes.
pub fn assert_recommended_descending(items: &[Destination]) {
    let votes: Vec<u64> = items.iter().map(|d| d.votes_recommended).collect();
    let mut sorted = votes.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(votes, sorted, "items not in descending recommendation order");
}

/// Assert that `after` differs from `before` in exactly the item with the
/// given id, and that every other element is unchanged in value and
/// position.
pub fn assert_only_item_changed(before: &[Destination], after: &[Destination], id: u64) {
    assert_eq!(
        before.len(),
        after.len(),
        "item count changed around an in-place update"
    );
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id, "list order changed around an in-place update");
        if b.id != id {
            assert_eq!(b, a, "untouched item {} was modified", b.id);
        }
    }
}

/// Assert that exactly one counter moved, by one, on the updated row.
pub fn assert_single_increment(before: &Destination, after: &Destination, field: VoteField) {
    for f in VoteField::ALL {
        let expected = if f == field {
            before.votes(f) + 1
        } else {
            before.votes(f)
        };
        assert_eq!(
            after.votes(f),
            expected,
            "counter {} has the wrong value after voting {}",
            f,
            field
        );
    }
}
