use log::{debug, warn};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

use super::campaigns_model::{Campaign, CampaignUpdate, NewCampaign};
use super::campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};
use crate::activities::{ActivityServiceTrait, NewActivityEntry};
use crate::budgets::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::strategies::StrategyRepositoryTrait;

/// Service for managing ad campaigns.
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    strategies: Arc<dyn StrategyRepositoryTrait>,
    budgets: Arc<dyn BudgetRepositoryTrait>,
    activities: Arc<dyn ActivityServiceTrait>,
}

impl CampaignService {
    pub fn new(
        repository: Arc<dyn CampaignRepositoryTrait>,
        strategies: Arc<dyn StrategyRepositoryTrait>,
        budgets: Arc<dyn BudgetRepositoryTrait>,
        activities: Arc<dyn ActivityServiceTrait>,
    ) -> Self {
        CampaignService {
            repository,
            strategies,
            budgets,
            activities,
        }
    }
}

#[async_trait::async_trait]
impl CampaignServiceTrait for CampaignService {
    async fn get_campaigns(&self) -> Result<Vec<Campaign>> {
        self.repository.get_all().await
    }

    async fn get_campaign(&self, campaign_id: i64) -> Result<Campaign> {
        self.repository.get_by_id(campaign_id).await
    }

    async fn get_campaigns_by_strategy(&self, strategy_id: i64) -> Result<Vec<Campaign>> {
        self.repository.get_by_strategy_id(strategy_id).await
    }

    async fn get_campaigns_by_client(&self, client_id: i64) -> Result<Vec<Campaign>> {
        let strategy_ids: HashSet<i64> = self
            .strategies
            .get_by_client_id(client_id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let campaigns = self.repository.get_all().await?;
        Ok(campaigns
            .into_iter()
            .filter(|c| strategy_ids.contains(&c.strategy_id))
            .collect())
    }

    async fn create_campaign(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        new_campaign.validate()?;

        // Both parents must exist; a campaign cannot dangle off a deleted
        // strategy or budget.
        let strategy = self.strategies.get_by_id(new_campaign.strategy_id).await?;
        let budget = self.budgets.get_by_id(new_campaign.budget_id).await?;
        debug!(
            "Creating campaign '{}' under strategy '{}'",
            new_campaign.name, strategy.name
        );

        let campaign = self.repository.create(new_campaign).await?;

        let entry = NewActivityEntry::new(
            "Created new campaign",
            "Campaign",
            campaign.id,
            json!({
                "campaignName": campaign.name,
                "strategyName": strategy.name,
                "platform": campaign.platform,
                "budgetName": format!("Budget #{} ({})", budget.id, budget.total),
            }),
        );
        if let Err(e) = self.activities.log(entry).await {
            warn!(
                "Failed to record activity for campaign {}: {}",
                campaign.id, e
            );
        }

        Ok(campaign)
    }

    async fn update_campaign(&self, campaign_update: CampaignUpdate) -> Result<Campaign> {
        campaign_update.validate()?;
        self.repository.update(campaign_update).await
    }

    async fn delete_campaign(&self, campaign_id: i64) -> Result<bool> {
        debug!("Deleting campaign {}", campaign_id);
        self.repository.delete(campaign_id).await
    }
}
