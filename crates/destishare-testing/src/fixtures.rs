//! Canned destination rows for tests.

use destishare_types::{Category, Destination};

/// Build a destination with the given id, category, and recommendation
/// count; the other counters start at zero.
pub fn destination(id: u64, text: &str, category: Category, recommended: u64) -> Destination {
    Destination {
        id,
        text: text.to_string(),
        source: format!("https://example.com/{}", id),
        category,
        votes_recommended: recommended,
        votes_must_visit: 0,
        votes_not_worth_it: 0,
    }
}

/// Three stored destinations with recommendation votes [5, 2, 9], in
/// insertion order. Fetching with the default order must yield 9, 5, 2.
pub fn seeded_rows() -> Vec<Destination> {
    vec![
        destination(1, "Kyoto in autumn", Category::Culture, 5),
        destination(2, "Lofoten road trip", Category::Nature, 2),
        destination(3, "Amalfi coast", Category::Beach, 9),
    ]
}
