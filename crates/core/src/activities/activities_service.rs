use log::debug;
use std::sync::Arc;

use super::activities_model::{ActivityEntry, NewActivityEntry};
use super::activities_traits::{ActivityRepositoryTrait, ActivityServiceTrait};
use crate::errors::Result;

/// Service for the audit feed shown on the dashboard and activity pages.
pub struct ActivityService {
    repository: Arc<dyn ActivityRepositoryTrait>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepositoryTrait>) -> Self {
        ActivityService { repository }
    }

    async fn sorted_entries(&self) -> Result<Vec<ActivityEntry>> {
        let mut entries = self.repository.get_all().await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

#[async_trait::async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn get_activities(&self) -> Result<Vec<ActivityEntry>> {
        self.sorted_entries().await
    }

    async fn get_activity(&self, activity_id: i64) -> Result<ActivityEntry> {
        self.repository.get_by_id(activity_id).await
    }

    async fn log(&self, new_entry: NewActivityEntry) -> Result<ActivityEntry> {
        new_entry.validate()?;
        debug!(
            "Recording activity '{}' on {} {}",
            new_entry.action, new_entry.entity_type, new_entry.entity_id
        );
        self.repository.create(new_entry).await
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<ActivityEntry>> {
        let mut entries = self.sorted_entries().await?;
        entries.truncate(limit);
        Ok(entries)
    }
}
