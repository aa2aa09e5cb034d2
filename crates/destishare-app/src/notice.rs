use std::fmt;

/// Wording the original client alerts with on a failed fetch.
pub const FETCH_FAILED: &str = "There was a problem fetching the destinations";
pub const CREATE_FAILED: &str = "There was a problem adding the destination";
pub const VOTE_FAILED: &str = "There was a problem updating the votes";

/// A single user-facing message for one failed remote operation.
///
/// No cause detail and no retry affordance: whatever the store error was,
/// the user sees one generic line and the UI stays interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
