//! Budget domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{UTILIZATION_CRITICAL_THRESHOLD, UTILIZATION_WARNING_THRESHOLD};
use crate::errors::{Result, ValidationError};

/// Reporting period a budget covers. Informational only; no proration is
/// applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

/// Kind of a budget allocation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationKind {
    /// A user-defined named slice of the budget
    Segment,
    /// The synthetic catch-all for budget not yet assigned
    Unallocated,
    /// A slice earmarked for a specific strategy
    Strategy,
}

/// A named slice of a budget's total, or the synthetic remainder bucket.
///
/// Ids are assigned by the allocation builder (max existing id + 1) and are
/// only meaningful within the owning budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: AllocationKind,
    pub name: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<i64>,
}

impl Allocation {
    /// True for entries that count toward the allocated total.
    pub fn is_named(&self) -> bool {
        self.kind != AllocationKind::Unallocated
    }
}

/// Domain model representing a client budget and its allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub client_id: i64,
    pub total: Decimal,
    pub period: BudgetPeriod,
    pub allocations: Vec<Allocation>,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new budget.
///
/// The persistence layer assigns `id` and `created_at`; the initial
/// allocation list is the full total marked unallocated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub client_id: i64,
    pub total: Decimal,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl NewBudget {
    /// Validates the new budget data.
    pub fn validate(&self) -> Result<()> {
        if self.total <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Budget total must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating a budget's total or period.
///
/// Changing the total re-derives the unallocated remainder from the existing
/// named allocations; the update is rejected if they no longer fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    pub id: Option<i64>,
    pub total: Decimal,
    pub period: BudgetPeriod,
}

impl BudgetUpdate {
    /// Validates the budget update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(ValidationError::InvalidInput(
                "Budget ID is required for updates".to_string(),
            )
            .into());
        }
        if self.total <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Budget total must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Display tier for a budget's utilization percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationTier {
    Healthy,
    Warning,
    Critical,
}

impl UtilizationTier {
    /// Classifies a utilization percentage against the display thresholds.
    pub fn from_percent(percent: Decimal) -> Self {
        if percent >= Decimal::from(UTILIZATION_CRITICAL_THRESHOLD) {
            UtilizationTier::Critical
        } else if percent >= Decimal::from(UTILIZATION_WARNING_THRESHOLD) {
            UtilizationTier::Warning
        } else {
            UtilizationTier::Healthy
        }
    }
}

/// Derived figures for displaying a budget.
///
/// `spent` is an external input (campaign spend tracking lives outside the
/// allocator); everything else is computed from the allocation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub budget_id: i64,
    pub total: Decimal,
    pub allocated: Decimal,
    pub unallocated: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub utilization: Decimal,
    pub tier: UtilizationTier,
}
