//! Campaign domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Advertising platform a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Google Ads")]
    GoogleAds,
    Facebook,
    Instagram,
    #[serde(rename = "YouTube")]
    YouTube,
    #[serde(rename = "Display Network")]
    DisplayNetwork,
    Email,
}

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

/// Domain model representing an ad campaign.
///
/// `spent` is reported by the ad platforms and recorded here as-is; nothing
/// in this crate derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub strategy_id: i64,
    pub budget_id: i64,
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub spent: Decimal,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a new campaign.
///
/// New campaigns start `Active` with zero spend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub strategy_id: i64,
    pub budget_id: i64,
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl NewCampaign {
    /// Validates the new campaign data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Campaign name".to_string()).into());
        }
        if self.start_date >= self.end_date {
            return Err(ValidationError::InvalidInput(
                "End date must be after start date".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating an existing campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub id: Option<i64>,
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub spent: Decimal,
    pub status: CampaignStatus,
}

impl CampaignUpdate {
    /// Validates the campaign update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(ValidationError::InvalidInput(
                "Campaign ID is required for updates".to_string(),
            )
            .into());
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("Campaign name".to_string()).into());
        }
        if self.start_date >= self.end_date {
            return Err(ValidationError::InvalidInput(
                "End date must be after start date".to_string(),
            )
            .into());
        }
        if self.spent < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Campaign spend cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
