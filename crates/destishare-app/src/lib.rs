//! View-state synchronization between the UI and the remote store.
//!
//! One owned state container ([`state::AppState`]) and one mutation path
//! ([`App`]): every remote operation goes issue-write, await the
//! authoritative response, merge only that response into state. Nothing is
//! assumed successful before the store answers, and every failure collapses
//! into a single generic [`notice::Notice`] for the presentation layer.

pub mod app;
pub mod form;
pub mod notice;
pub mod state;

pub use app::{App, FetchTicket};
pub use form::DraftForm;
pub use notice::Notice;
pub use state::AppState;
