use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported by the allocation builder.
///
/// All of these are detected before any mutation: a rejected add or update
/// leaves the caller's allocation list unchanged and never reaches the
/// persistence layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Allocation amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("Allocation name cannot be empty")]
    EmptyName,

    #[error("Allocation of {requested} exceeds the budget: {available} available")]
    ExceedsBudget {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Segment {0} not found in this budget")]
    SegmentNotFound(i64),
}
