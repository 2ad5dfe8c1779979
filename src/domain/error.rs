//! Domain errors

use thiserror::Error;

/// Errors produced by domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Malformed rental period: start after end, or a date string that
    /// could not be parsed at the HTTP boundary.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The requested period overlaps an existing rental.
    #[error("Booking conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
