use adledger_core::campaigns::{
    Campaign, CampaignRepositoryTrait, CampaignStatus, CampaignUpdate, NewCampaign,
};
use adledger_core::errors::Result;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use super::Arena;
use crate::util::{not_found, required_id};

pub struct MemoryCampaignRepository {
    arena: Arena<Campaign>,
}

impl MemoryCampaignRepository {
    pub fn new() -> Self {
        MemoryCampaignRepository {
            arena: Arena::new(),
        }
    }

    pub fn with_records(records: Vec<Campaign>) -> Self {
        MemoryCampaignRepository {
            arena: Arena::seeded(records.into_iter().map(|c| (c.id, c))),
        }
    }
}

impl Default for MemoryCampaignRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignRepositoryTrait for MemoryCampaignRepository {
    async fn get_all(&self) -> Result<Vec<Campaign>> {
        Ok(self.arena.all())
    }

    async fn get_by_id(&self, campaign_id: i64) -> Result<Campaign> {
        self.arena
            .get(campaign_id)
            .ok_or_else(|| not_found("Campaign", campaign_id))
    }

    async fn get_by_strategy_id(&self, strategy_id: i64) -> Result<Vec<Campaign>> {
        Ok(self
            .arena
            .all()
            .into_iter()
            .filter(|c| c.strategy_id == strategy_id)
            .collect())
    }

    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign> {
        // New campaigns start active with no recorded spend.
        Ok(self.arena.insert_with(|id| Campaign {
            id,
            strategy_id: new_campaign.strategy_id,
            budget_id: new_campaign.budget_id,
            name: new_campaign.name.clone(),
            platform: new_campaign.platform,
            start_date: new_campaign.start_date,
            end_date: new_campaign.end_date,
            spent: Decimal::ZERO,
            status: CampaignStatus::Active,
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, campaign_update: CampaignUpdate) -> Result<Campaign> {
        let id = required_id(campaign_update.id)?;
        let existing = self
            .arena
            .get(id)
            .ok_or_else(|| not_found("Campaign", id))?;

        let updated = Campaign {
            id,
            strategy_id: existing.strategy_id,
            budget_id: existing.budget_id,
            name: campaign_update.name,
            platform: campaign_update.platform,
            start_date: campaign_update.start_date,
            end_date: campaign_update.end_date,
            spent: campaign_update.spent,
            status: campaign_update.status,
            created_at: existing.created_at,
        };
        self.arena.replace(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, campaign_id: i64) -> Result<bool> {
        if self.arena.remove(campaign_id) {
            Ok(true)
        } else {
            Err(not_found("Campaign", campaign_id))
        }
    }
}
