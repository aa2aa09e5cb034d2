//! Test support for the destishare workspace.
//!
//! Provides an in-process [`MemoryStore`] implementing the repository
//! contract (with a failure switch for exercising notice paths), canned
//! destination fixtures, and assertion helpers shared across crates.

pub mod assertions;
pub mod fixtures;
pub mod memory;

pub use memory::MemoryStore;
