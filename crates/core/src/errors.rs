//! Core error types for the AdLedger application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (from the HTTP client, serialization, etc.) are converted to these types by
//! the storage layer.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::budgets::AllocationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the agency dashboard application.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// backend-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Budget allocation rejected: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for record-store operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (HTTP, serialization, etc.) into this
/// format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to reach the record store.
    #[error("Failed to connect to record store: {0}")]
    ConnectionFailed(String),

    /// A store request failed to execute.
    #[error("Record store request failed: {0}")]
    RequestFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A record could not be encoded or decoded.
    #[error("Record serialization failed: {0}")]
    Serialization(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for Error {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

impl Error {
    /// True when the error is a missing-record failure from the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}
