//! Strategy domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Lifecycle status of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StrategyStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

/// Domain model representing a marketing strategy for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
    pub status: StrategyStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    pub client_id: i64,
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
}

impl NewStrategy {
    /// Validates the new strategy data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Strategy name".to_string()).into());
        }
        if self.goal.trim().is_empty() {
            return Err(ValidationError::MissingField("Strategy goal".to_string()).into());
        }
        if self.target_audience.trim().is_empty() {
            return Err(ValidationError::MissingField("Target audience".to_string()).into());
        }
        if self.kpi.trim().is_empty() {
            return Err(ValidationError::MissingField("Key performance indicator".to_string()).into());
        }
        if self.allocated_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Strategy budget must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyUpdate {
    pub id: Option<i64>,
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
    pub status: StrategyStatus,
}

impl StrategyUpdate {
    /// Validates the strategy update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(ValidationError::InvalidInput(
                "Strategy ID is required for updates".to_string(),
            )
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Strategy name".to_string()).into());
        }
        if self.allocated_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Strategy budget must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
