//! Remote store access for the destishare destinations table.
//!
//! The hosted database service exposes the table through a PostgREST-style
//! API: select with equality filters, server-side order-by and limit,
//! insert and update returning the affected rows. This crate defines the
//! repository contract the rest of the workspace depends on and the one
//! production adapter ([`RestStore`]) that speaks that API.

pub mod error;
pub mod query;
pub mod repository;
pub mod rest;

pub use error::{Error, Result};
pub use query::ListQuery;
pub use repository::DestinationRepository;
pub use rest::RestStore;
