//! Budget allocation builder.
//!
//! Pure functions over a caller-held allocation list. The builder itself is
//! stateless: every operation takes the current list by reference and returns
//! a new list, so a rejected edit leaves the caller's state untouched. The
//! unallocated remainder is a derived view and is only materialized by
//! [`finalize`], immediately before the list is handed to persistence.

use rust_decimal::Decimal;

use super::budgets_errors::AllocationError;
use super::budgets_model::{Allocation, AllocationKind};

/// Display label for the synthetic remainder bucket.
pub const UNALLOCATED_NAME: &str = "Unallocated Budget";

/// Sum of all named (non-unallocated) allocation amounts.
pub fn allocated_total(allocations: &[Allocation]) -> Decimal {
    allocations
        .iter()
        .filter(|a| a.is_named())
        .map(|a| a.amount)
        .sum()
}

/// Budget amount not yet assigned to any named allocation.
pub fn remaining(allocations: &[Allocation], total: Decimal) -> Decimal {
    total - allocated_total(allocations)
}

/// Percentage of the total covered by named allocations.
///
/// Returns zero for non-positive totals rather than dividing by them.
pub fn utilization(allocations: &[Allocation], total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    allocated_total(allocations) / total * Decimal::ONE_HUNDRED
}

/// Appends a user-defined segment to the allocation list.
///
/// Fails with `ExceedsBudget` when the new amount would push the named
/// allocations past `total`.
pub fn add_segment(
    current: &[Allocation],
    total: Decimal,
    name: &str,
    amount: Decimal,
) -> Result<Vec<Allocation>, AllocationError> {
    push_allocation(current, total, AllocationKind::Segment, name, amount, None)
}

/// Appends a strategy-linked allocation, same ceiling rules as a segment.
pub fn add_strategy_allocation(
    current: &[Allocation],
    total: Decimal,
    name: &str,
    amount: Decimal,
    strategy_id: i64,
) -> Result<Vec<Allocation>, AllocationError> {
    push_allocation(
        current,
        total,
        AllocationKind::Strategy,
        name,
        amount,
        Some(strategy_id),
    )
}

fn push_allocation(
    current: &[Allocation],
    total: Decimal,
    kind: AllocationKind,
    name: &str,
    amount: Decimal,
    strategy_id: Option<i64>,
) -> Result<Vec<Allocation>, AllocationError> {
    let name = validate_name(name)?;
    validate_amount(amount)?;

    let current_allocated = allocated_total(current);
    if current_allocated + amount > total {
        return Err(AllocationError::ExceedsBudget {
            requested: amount,
            available: total - current_allocated,
        });
    }

    let mut next = current.to_vec();
    next.push(Allocation {
        id: next_id(current),
        kind,
        name,
        amount,
        strategy_id,
    });
    Ok(next)
}

/// Renames and/or re-prices an existing segment.
///
/// The segment's own prior amount is excluded from the ceiling check, so a
/// no-op edit always succeeds.
pub fn update_segment(
    current: &[Allocation],
    total: Decimal,
    segment_id: i64,
    name: &str,
    amount: Decimal,
) -> Result<Vec<Allocation>, AllocationError> {
    let name = validate_name(name)?;
    validate_amount(amount)?;

    let existing = current
        .iter()
        .find(|a| a.id == segment_id && a.is_named())
        .ok_or(AllocationError::SegmentNotFound(segment_id))?;

    let other_segments_total = allocated_total(current) - existing.amount;
    if other_segments_total + amount > total {
        return Err(AllocationError::ExceedsBudget {
            requested: amount,
            available: total - other_segments_total,
        });
    }

    Ok(current
        .iter()
        .map(|a| {
            if a.id == segment_id {
                Allocation {
                    name: name.clone(),
                    amount,
                    ..a.clone()
                }
            } else {
                a.clone()
            }
        })
        .collect())
}

/// Removes the segment with the given id. Always succeeds; removing an
/// unknown id is a no-op.
pub fn remove_segment(current: &[Allocation], segment_id: i64) -> Vec<Allocation> {
    current
        .iter()
        .filter(|a| a.id != segment_id)
        .cloned()
        .collect()
}

/// Produces the allocation list as persisted: all named entries plus one
/// trailing unallocated entry covering the remainder, included only when the
/// remainder is strictly positive. A fully-allocated budget has no
/// unallocated entry.
pub fn finalize(segments: &[Allocation], total: Decimal) -> Vec<Allocation> {
    let mut result: Vec<Allocation> = segments.iter().filter(|a| a.is_named()).cloned().collect();

    let leftover = total - allocated_total(&result);
    if leftover > Decimal::ZERO {
        result.push(Allocation {
            id: next_id(&result),
            kind: AllocationKind::Unallocated,
            name: UNALLOCATED_NAME.to_string(),
            amount: leftover,
            strategy_id: None,
        });
    }
    result
}

/// Re-validates an externally supplied segment list in one pass, preserving
/// entry order and kinds while reassigning sequential ids.
///
/// Used by the budget service before persisting allocations it did not build
/// itself; unallocated entries in the input are dropped (the remainder is
/// recomputed by [`finalize`]).
pub fn vet(segments: &[Allocation], total: Decimal) -> Result<Vec<Allocation>, AllocationError> {
    let mut vetted: Vec<Allocation> = Vec::new();
    for entry in segments.iter().filter(|a| a.is_named()) {
        let name = validate_name(&entry.name)?;
        validate_amount(entry.amount)?;

        let current_allocated = allocated_total(&vetted);
        if current_allocated + entry.amount > total {
            return Err(AllocationError::ExceedsBudget {
                requested: entry.amount,
                available: total - current_allocated,
            });
        }
        vetted.push(Allocation {
            id: next_id(&vetted),
            name,
            ..entry.clone()
        });
    }
    Ok(vetted)
}

fn validate_name(name: &str) -> Result<String, AllocationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AllocationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Decimal) -> Result<(), AllocationError> {
    if amount <= Decimal::ZERO {
        return Err(AllocationError::InvalidAmount(amount));
    }
    Ok(())
}

fn next_id(allocations: &[Allocation]) -> i64 {
    allocations.iter().map(|a| a.id).max().unwrap_or(0) + 1
}
