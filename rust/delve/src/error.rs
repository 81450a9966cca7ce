//! Error types for navigation and unwrapping

use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelveError {
    /// A navigation step resolved to nothing while raise-on-missing was
    /// enabled
    #[error("No value was found at this location")]
    NotFound,

    /// An operation that no configuration makes valid, such as taking the
    /// truth value of an absent payload or iterating a scalar
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for navigation operations
pub type DelveResult<T> = Result<T, DelveError>;
