//! Error type for store operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The id does not exist in the relevant table.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// The gmail address is already registered.
    #[error("Email already registered")]
    DuplicateEmail,

    /// The matric number is already registered.
    #[error("Matric number already registered")]
    DuplicateMatric,

    /// The acting user does not own the report being mutated.
    #[error("You can only modify your own reports")]
    Forbidden,
}

pub type Result<T> = std::result::Result<T, StoreError>;
