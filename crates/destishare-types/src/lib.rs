pub mod category;
pub mod destination;
pub mod error;

pub use category::{Category, CategoryFilter, KNOWN_CATEGORIES};
pub use destination::{
    Destination, NewDestination, OrderBy, VoteField, DEFAULT_LIST_LIMIT,
};
pub use error::{Error, Result};
