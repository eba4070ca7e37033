//! Activity log domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_ACTIVITY_ACTOR;
use crate::errors::{Result, ValidationError};

/// A single entry in the audit feed: who did what to which entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: i64,
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    pub details: Value,
    pub timestamp: DateTime<Utc>,
}

/// Input model for recording a new activity entry.
///
/// The persistence layer assigns `id` and `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityEntry {
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    pub details: Value,
}

impl NewActivityEntry {
    /// Builds an entry attributed to the single-user placeholder actor.
    pub fn new(action: &str, entity_type: &str, entity_id: i64, details: Value) -> Self {
        Self {
            user_id: DEFAULT_ACTIVITY_ACTOR.to_string(),
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            details,
        }
    }

    /// Validates the new activity entry.
    pub fn validate(&self) -> Result<()> {
        if self.action.trim().is_empty() {
            return Err(ValidationError::MissingField("action".to_string()).into());
        }
        if self.entity_type.trim().is_empty() {
            return Err(ValidationError::MissingField("entityType".to_string()).into());
        }
        Ok(())
    }
}
