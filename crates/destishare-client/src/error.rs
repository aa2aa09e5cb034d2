use std::fmt;

/// Result type for destishare-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store client layer.
///
/// Callers are expected to collapse all of these into a single generic
/// user-facing notice; the variants exist for logs and tests, not for
/// differentiated recovery.
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS)
    Http(reqwest::Error),

    /// The service answered with a non-success status
    Api { status: u16, message: String },

    /// The response body did not decode as the expected rows
    Decode(serde_json::Error),

    /// Insert or update returned zero rows
    EmptyReply(String),

    /// Client configuration problem (bad base URL, unusable api key)
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api { status, message } => {
                write!(f, "Store error (status {}): {}", status, message)
            }
            Error::Decode(err) => write!(f, "Decode error: {}", err),
            Error::EmptyReply(msg) => write!(f, "Store returned no rows: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Api { .. } | Error::EmptyReply(_) | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
