use async_trait::async_trait;

use super::activities_model::{ActivityEntry, NewActivityEntry};
use crate::errors::Result;

/// Trait defining the contract for activity-log repository operations.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ActivityEntry>>;
    async fn get_by_id(&self, activity_id: i64) -> Result<ActivityEntry>;
    async fn create(&self, new_entry: NewActivityEntry) -> Result<ActivityEntry>;
}

/// Trait defining the contract for activity-log service operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    /// All entries, newest first.
    async fn get_activities(&self) -> Result<Vec<ActivityEntry>>;
    async fn get_activity(&self, activity_id: i64) -> Result<ActivityEntry>;
    async fn log(&self, new_entry: NewActivityEntry) -> Result<ActivityEntry>;
    /// The `limit` newest entries.
    async fn get_recent(&self, limit: usize) -> Result<Vec<ActivityEntry>>;
}
