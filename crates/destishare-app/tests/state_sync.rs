//! State synchronization tests
//!
//! Drives the state container against the in-memory store and verifies
//! the fetch/submit/vote reconciliation rules.

use destishare_app::{notice, App};
use destishare_client::DestinationRepository;
use destishare_testing::{assertions, fixtures, MemoryStore};
use destishare_types::{Category, CategoryFilter, VoteField};

#[tokio::test]
async fn initial_load_orders_by_recommendation_votes() {
    // Given: 3 stored destinations with votesRecommended = [5, 2, 9]
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));

    // When: initial load with filter `all`
    app.refresh().await;

    // Then: rendered order is 9, 5, 2
    let votes: Vec<u64> = app
        .state()
        .items
        .iter()
        .map(|d| d.votes_recommended)
        .collect();
    assert_eq!(votes, vec![9, 5, 2]);
    assertions::assert_recommended_descending(&app.state().items);
    assert!(!app.state().loading);
}

#[tokio::test]
async fn filter_change_replaces_the_collection_wholesale() {
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));
    app.refresh().await;

    app.set_filter(CategoryFilter::Only(Category::Nature)).await;

    assert_eq!(app.state().filter, CategoryFilter::Only(Category::Nature));
    assert_eq!(app.state().items.len(), 1);
    assert_eq!(app.state().items[0].category, Category::Nature);
}

#[tokio::test]
async fn empty_filter_result_is_not_an_error() {
    // Given: no beach destinations in the store
    let rows = vec![fixtures::destination(1, "Kyoto", Category::Culture, 5)];
    let mut app = App::new(MemoryStore::with_rows(rows));

    // When: filter set to `beach`
    app.set_filter(CategoryFilter::Only(Category::Beach)).await;

    // Then: empty collection, no notice
    assert!(app.state().items.is_empty());
    assert!(app.drain_notices().is_empty());
    assert!(!app.state().loading);
}

#[tokio::test]
async fn failed_fetch_fires_one_notice_and_keeps_prior_items() {
    let store = MemoryStore::with_rows(fixtures::seeded_rows());
    let mut app = App::new(store);
    app.refresh().await;
    let shown_before = app.state().items.clone();

    // When: the next fetch fails
    fail_next(&mut app);
    app.set_filter(CategoryFilter::Only(Category::Beach)).await;

    // Then: exactly one generic notice, loading cleared, previous items kept
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, notice::FETCH_FAILED);
    assert!(!app.state().loading);
    assert_eq!(app.state().items, shown_before);
}

#[tokio::test]
async fn complete_submission_prepends_and_resets_the_form() {
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));
    app.refresh().await;
    app.toggle_form();

    app.drafts_mut().text = "Lofoten road trip".to_string();
    app.drafts_mut().source = "https://example.com/lofoten".to_string();
    app.drafts_mut().category = "nature".to_string();

    let stored = app.submit().await.expect("submission should create a row");

    // Prepended as-is, even though zero votes violates the sort order
    assert_eq!(app.state().items.len(), 4);
    assert_eq!(app.state().items[0], stored);
    assert_eq!(stored.votes_recommended, 0);

    assert!(!app.state().form_visible);
    assert!(!app.state().submitting);
    assert!(app.drafts().text.is_empty());
    assert!(app.drafts().source.is_empty());
    assert!(app.drafts().category.is_empty());
    assert!(app.drain_notices().is_empty());

    // The store really holds the new row
    assert_eq!(app.repo().snapshot().len(), 4);
}

#[tokio::test]
async fn incomplete_submission_makes_no_remote_call_and_no_state_change() {
    let store = MemoryStore::with_rows(fixtures::seeded_rows());
    let mut app = App::new(store);
    app.refresh().await;
    app.toggle_form();

    app.drafts_mut().text = "Lofoten road trip".to_string();
    // source and category left empty

    // A failure is armed; if submit reached the store, it would trip
    fail_next(&mut app);
    let result = app.submit().await;

    assert!(result.is_none());
    assert_eq!(app.state().items.len(), 3);
    assert!(app.state().form_visible);
    assert!(app.drain_notices().is_empty());
    assert_eq!(app.drafts().text, "Lofoten road trip");
}

#[tokio::test]
async fn failed_submission_keeps_the_form_open_with_drafts() {
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));
    app.refresh().await;
    app.toggle_form();

    app.drafts_mut().text = "Lofoten road trip".to_string();
    app.drafts_mut().source = "https://example.com/lofoten".to_string();
    app.drafts_mut().category = "nature".to_string();

    fail_next(&mut app);
    let result = app.submit().await;

    assert!(result.is_none());
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, notice::CREATE_FAILED);
    assert!(!app.state().submitting);
    assert!(app.state().form_visible);
    assert_eq!(app.drafts().text, "Lofoten road trip");
    assert_eq!(app.state().items.len(), 3);
}

#[tokio::test]
async fn vote_replaces_only_the_matching_item_in_place() {
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));
    app.refresh().await;
    let before = app.state().items.clone();
    let target = before.iter().find(|d| d.id == 1).unwrap().clone();

    app.vote(1, VoteField::MustVisit).await;

    let after = &app.state().items;
    assertions::assert_only_item_changed(&before, after, 1);
    let updated = after.iter().find(|d| d.id == 1).unwrap();
    assertions::assert_single_increment(&target, updated, VoteField::MustVisit);
    assert_eq!(app.state().voting, None);
    assert!(app.drain_notices().is_empty());
}

#[tokio::test]
async fn failed_vote_leaves_the_item_unchanged() {
    let mut app = App::new(MemoryStore::with_rows(fixtures::seeded_rows()));
    app.refresh().await;
    let before = app.state().items.clone();

    fail_next(&mut app);
    app.vote(1, VoteField::Recommended).await;

    assert_eq!(app.state().items, before);
    let notices = app.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, notice::VOTE_FAILED);
    assert_eq!(app.state().voting, None);
}

#[tokio::test]
async fn stale_list_response_is_dropped() {
    let store = MemoryStore::with_rows(fixtures::seeded_rows());
    let slow = store.list(destishare_client::ListQuery::new()).await;

    let mut app = App::new(store);

    // Two fetches issued back to back; the first resolves last
    let stale_ticket = app.begin_fetch(CategoryFilter::All);
    let fresh_ticket = app.begin_fetch(CategoryFilter::Only(Category::Beach));

    let fresh = vec![fixtures::destination(3, "Amalfi coast", Category::Beach, 9)];
    assert!(app.apply_fetch(&fresh_ticket, Ok(fresh.clone())));
    assert!(!app.apply_fetch(&stale_ticket, slow));

    // The stale all-categories response did not overwrite the beach list
    assert_eq!(app.state().items, fresh);
    assert_eq!(app.state().filter, CategoryFilter::Only(Category::Beach));
    assert!(!app.state().loading);
}

#[tokio::test]
async fn closing_the_form_keeps_the_drafts() {
    let mut app = App::new(MemoryStore::new());
    app.toggle_form();
    app.drafts_mut().text = "half-typed idea".to_string();

    app.toggle_form();
    assert!(!app.state().form_visible);
    assert_eq!(app.drafts().text, "half-typed idea");

    app.toggle_form();
    assert!(app.state().form_visible);
    assert_eq!(app.drafts().text, "half-typed idea");
}

/// Arm the underlying store to fail its next request.
fn fail_next(app: &mut App<MemoryStore>) {
    app.repo().fail_next_request();
}
