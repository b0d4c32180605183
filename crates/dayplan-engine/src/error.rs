use std::fmt;

/// Result type for dayplan-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Growth configuration cannot produce a valid window
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid growth configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
