use adledger_core::activities::{ActivityEntry, ActivityRepositoryTrait, NewActivityEntry};
use adledger_core::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::api::RemoteApi;
use super::model::{ActivityRecord, NewActivityRecord};

pub struct RemoteActivityRepository {
    api: Arc<RemoteApi>,
}

impl RemoteActivityRepository {
    pub fn new(api: Arc<RemoteApi>) -> Self {
        RemoteActivityRepository { api }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for RemoteActivityRepository {
    async fn get_all(&self) -> Result<Vec<ActivityEntry>> {
        let records: Vec<ActivityRecord> = self.api.get_json("activities").await?;
        Ok(records.into_iter().map(ActivityEntry::from).collect())
    }

    async fn get_by_id(&self, activity_id: i64) -> Result<ActivityEntry> {
        let record: ActivityRecord = self
            .api
            .get_json(&format!("activities/{activity_id}"))
            .await?;
        Ok(ActivityEntry::from(record))
    }

    async fn create(&self, new_entry: NewActivityEntry) -> Result<ActivityEntry> {
        let record: ActivityRecord = self
            .api
            .post_json("activities", &NewActivityRecord::from(new_entry))
            .await?;
        Ok(ActivityEntry::from(record))
    }
}
