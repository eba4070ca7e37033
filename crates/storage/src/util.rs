//! Small helpers shared by both backends.

use adledger_core::errors::{Error, Result, StoreError, ValidationError};

pub(crate) fn not_found(entity: &str, id: i64) -> Error {
    StoreError::NotFound(format!("{entity} {id}")).into()
}

/// Update payloads carry an optional id; persistence needs a concrete one.
pub(crate) fn required_id(id: Option<i64>) -> Result<i64> {
    id.ok_or_else(|| ValidationError::MissingField("id".to_string()).into())
}
