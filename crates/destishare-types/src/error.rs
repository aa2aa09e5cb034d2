use std::fmt;

/// Result type for destishare-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised before anything touches the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was empty at submission time
    MissingField(&'static str),

    /// The category name is not one of the known set
    UnknownCategory(String),

    /// The vote field name is not one of the three counters
    UnknownVoteField(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "Missing required field: {}", field),
            Error::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
            Error::UnknownVoteField(name) => write!(f, "Unknown vote field: {}", name),
        }
    }
}

impl std::error::Error for Error {}
