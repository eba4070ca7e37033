use adledger_core::activities::{ActivityEntry, ActivityRepositoryTrait, NewActivityEntry};
use adledger_core::errors::Result;
use async_trait::async_trait;
use chrono::Utc;

use super::Arena;
use crate::util::not_found;

pub struct MemoryActivityRepository {
    arena: Arena<ActivityEntry>,
}

impl MemoryActivityRepository {
    pub fn new() -> Self {
        MemoryActivityRepository {
            arena: Arena::new(),
        }
    }

    pub fn with_records(records: Vec<ActivityEntry>) -> Self {
        MemoryActivityRepository {
            arena: Arena::seeded(records.into_iter().map(|a| (a.id, a))),
        }
    }
}

impl Default for MemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityRepositoryTrait for MemoryActivityRepository {
    async fn get_all(&self) -> Result<Vec<ActivityEntry>> {
        Ok(self.arena.all())
    }

    async fn get_by_id(&self, activity_id: i64) -> Result<ActivityEntry> {
        self.arena
            .get(activity_id)
            .ok_or_else(|| not_found("Activity", activity_id))
    }

    async fn create(&self, new_entry: NewActivityEntry) -> Result<ActivityEntry> {
        Ok(self.arena.insert_with(|id| ActivityEntry {
            id,
            user_id: new_entry.user_id.clone(),
            action: new_entry.action.clone(),
            entity_type: new_entry.entity_type.clone(),
            entity_id: new_entry.entity_id.clone(),
            details: new_entry.details.clone(),
            timestamp: Utc::now(),
        }))
    }
}
