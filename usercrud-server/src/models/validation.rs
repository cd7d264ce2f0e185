//! Validation error types

use std::fmt;

/// Input that could not be decoded into a domain type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field doesn't match the required format (e.g. a numeric key)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body was not valid JSON for the expected shape
    MalformedBody { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}
