use async_trait::async_trait;

use super::campaigns_model::{Campaign, CampaignUpdate, NewCampaign};
use crate::errors::Result;

/// Trait defining the contract for Campaign repository operations.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Campaign>>;
    async fn get_by_id(&self, campaign_id: i64) -> Result<Campaign>;
    async fn get_by_strategy_id(&self, strategy_id: i64) -> Result<Vec<Campaign>>;
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign>;
    async fn update(&self, campaign_update: CampaignUpdate) -> Result<Campaign>;
    async fn delete(&self, campaign_id: i64) -> Result<bool>;
}

/// Trait defining the contract for Campaign service operations.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>>;
    async fn get_campaign(&self, campaign_id: i64) -> Result<Campaign>;
    async fn get_campaigns_by_strategy(&self, strategy_id: i64) -> Result<Vec<Campaign>>;
    /// Campaigns reached through any of the client's strategies.
    async fn get_campaigns_by_client(&self, client_id: i64) -> Result<Vec<Campaign>>;
    async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<Campaign>;
    async fn update_campaign(&self, campaign_update: CampaignUpdate) -> Result<Campaign>;
    async fn delete_campaign(&self, campaign_id: i64) -> Result<bool>;
}
