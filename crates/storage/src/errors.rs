//! Storage-specific error types.
//!
//! This module provides error types that wrap HTTP and serialization errors
//! and convert them to the backend-agnostic error types defined in
//! `adledger_core`.

use adledger_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors that wrap reqwest and serde types.
///
/// These errors are internal to the storage layer and are converted to
/// `adledger_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid record store URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Http(e) if e.is_connect() || e.is_timeout() => {
                Error::Store(StoreError::ConnectionFailed(e.to_string()))
            }
            StorageError::Http(e) => Error::Store(StoreError::RequestFailed(e.to_string())),
            StorageError::NotFound(msg) => Error::Store(StoreError::NotFound(msg)),
            StorageError::Serialization(e) => {
                Error::Store(StoreError::Serialization(e.to_string()))
            }
            StorageError::Rejected { status, message } => Error::Store(
                StoreError::RequestFailed(format!("status {status}: {message}")),
            ),
            StorageError::InvalidBaseUrl(msg) => Error::Store(StoreError::ConnectionFailed(msg)),
        }
    }
}
