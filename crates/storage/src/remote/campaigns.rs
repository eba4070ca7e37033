use adledger_core::campaigns::{Campaign, CampaignRepositoryTrait, CampaignUpdate, NewCampaign};
use adledger_core::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::api::RemoteApi;
use super::model::{CampaignRecord, CampaignUpdateRecord, NewCampaignRecord};
use crate::util::required_id;

pub struct RemoteCampaignRepository {
    api: Arc<RemoteApi>,
}

impl RemoteCampaignRepository {
    pub fn new(api: Arc<RemoteApi>) -> Self {
        RemoteCampaignRepository { api }
    }
}

#[async_trait]
impl CampaignRepositoryTrait for RemoteCampaignRepository {
    async fn get_all(&self) -> Result<Vec<Campaign>> {
        let records: Vec<CampaignRecord> = self.api.get_json("campaigns").await?;
        Ok(records.into_iter().map(Campaign::from).collect())
    }

    async fn get_by_id(&self, campaign_id: i64) -> Result<Campaign> {
        let record: CampaignRecord = self
            .api
            .get_json(&format!("campaigns/{campaign_id}"))
            .await?;
        Ok(Campaign::from(record))
    }

    async fn get_by_strategy_id(&self, strategy_id: i64) -> Result<Vec<Campaign>> {
        let campaigns = self.get_all().await?;
        Ok(campaigns
            .into_iter()
            .filter(|c| c.strategy_id == strategy_id)
            .collect())
    }

    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        let record: CampaignRecord = self
            .api
            .post_json("campaigns", &NewCampaignRecord::from(new_campaign))
            .await?;
        Ok(Campaign::from(record))
    }

    async fn update(&self, campaign_update: CampaignUpdate) -> Result<Campaign> {
        let id = required_id(campaign_update.id)?;
        let record: CampaignRecord = self
            .api
            .put_json(
                &format!("campaigns/{id}"),
                &CampaignUpdateRecord::from(campaign_update),
            )
            .await?;
        Ok(Campaign::from(record))
    }

    async fn delete(&self, campaign_id: i64) -> Result<bool> {
        self.api.delete(&format!("campaigns/{campaign_id}")).await?;
        Ok(true)
    }
}
