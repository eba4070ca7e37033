use log::{debug, warn};
use serde_json::json;
use std::sync::Arc;

use super::strategies_model::{NewStrategy, Strategy, StrategyUpdate};
use super::strategies_traits::{StrategyRepositoryTrait, StrategyServiceTrait};
use crate::activities::{ActivityServiceTrait, NewActivityEntry};
use crate::clients::ClientRepositoryTrait;
use crate::errors::Result;

/// Service for managing client marketing strategies.
pub struct StrategyService {
    repository: Arc<dyn StrategyRepositoryTrait>,
    clients: Arc<dyn ClientRepositoryTrait>,
    activities: Arc<dyn ActivityServiceTrait>,
}

impl StrategyService {
    pub fn new(
        repository: Arc<dyn StrategyRepositoryTrait>,
        clients: Arc<dyn ClientRepositoryTrait>,
        activities: Arc<dyn ActivityServiceTrait>,
    ) -> Self {
        StrategyService {
            repository,
            clients,
            activities,
        }
    }
}

#[async_trait::async_trait]
impl StrategyServiceTrait for StrategyService {
    async fn get_strategies(&self) -> Result<Vec<Strategy>> {
        self.repository.get_all().await
    }

    async fn get_strategy(&self, strategy_id: i64) -> Result<Strategy> {
        self.repository.get_by_id(strategy_id).await
    }

    async fn get_strategies_by_client(&self, client_id: i64) -> Result<Vec<Strategy>> {
        self.repository.get_by_client_id(client_id).await
    }

    async fn create_strategy(&self, new_strategy: NewStrategy) -> Result<Strategy> {
        new_strategy.validate()?;

        // The owning client must exist before a strategy can point at it.
        let client = self.clients.get_by_id(new_strategy.client_id).await?;
        debug!(
            "Creating strategy '{}' for client '{}'",
            new_strategy.name, client.name
        );

        let strategy = self.repository.create(new_strategy).await?;

        let entry = NewActivityEntry::new(
            "Created new strategy",
            "Strategy",
            strategy.id,
            json!({
                "clientName": client.name,
                "strategyName": strategy.name,
                "allocatedBudget": strategy.allocated_budget,
            }),
        );
        if let Err(e) = self.activities.log(entry).await {
            warn!(
                "Failed to record activity for strategy {}: {}",
                strategy.id, e
            );
        }

        Ok(strategy)
    }

    async fn update_strategy(&self, strategy_update: StrategyUpdate) -> Result<Strategy> {
        strategy_update.validate()?;
        self.repository.update(strategy_update).await
    }

    async fn delete_strategy(&self, strategy_id: i64) -> Result<bool> {
        debug!("Deleting strategy {}", strategy_id);
        self.repository.delete(strategy_id).await
    }
}
