//! Client domain models.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::BudgetPeriod;
use crate::errors::{Result, ValidationError};

lazy_static! {
    /// Regex pattern for validating contact emails
    /// Format: \S+@\S+\.\S+
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\S+@\S+\.\S+")
            .expect("Invalid regex pattern");
}

/// Engagement status of a client account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClientStatus {
    #[default]
    Active,
    Paused,
    Inactive,
}

/// Domain model representing a client of the agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    pub budget_period: BudgetPeriod,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new client.
///
/// The persistence layer assigns `id` and `created_at`; new clients start
/// `Active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    #[serde(default)]
    pub budget_period: BudgetPeriod,
}

impl NewClient {
    /// Validates the new client data.
    pub fn validate(&self) -> Result<()> {
        require_non_empty(&self.name, "Client name")?;
        require_non_empty(&self.dealership_type, "Dealership type")?;
        require_non_empty(&self.location, "Location")?;
        require_non_empty(&self.contact_name, "Contact name")?;
        require_non_empty(&self.contact_phone, "Contact phone")?;
        validate_email(&self.contact_email)?;
        if self.total_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Client budget must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub id: Option<i64>,
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    pub budget_period: BudgetPeriod,
    pub status: ClientStatus,
}

impl ClientUpdate {
    /// Validates the client update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(ValidationError::InvalidInput(
                "Client ID is required for updates".to_string(),
            )
            .into());
        }
        require_non_empty(&self.name, "Client name")?;
        validate_email(&self.contact_email)?;
        if self.total_budget <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Client budget must be a positive amount".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(())
}

/// Accepts anything shaped like `local@domain.tld`; real deliverability is
/// the mail system's problem.
fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email.trim()
        ))
        .into());
    }
    Ok(())
}
