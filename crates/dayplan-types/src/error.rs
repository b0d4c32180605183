use std::fmt;

/// Result type for dayplan-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input is not a canonical `YYYY-MM-DD` calendar date
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(input) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", input)
            }
        }
    }
}

impl std::error::Error for Error {}
