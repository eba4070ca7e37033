use adledger_core::errors::Result;
use adledger_core::strategies::{
    NewStrategy, Strategy, StrategyRepositoryTrait, StrategyStatus, StrategyUpdate,
};
use async_trait::async_trait;
use chrono::Utc;

use super::Arena;
use crate::util::{not_found, required_id};

pub struct MemoryStrategyRepository {
    arena: Arena<Strategy>,
}

impl MemoryStrategyRepository {
    pub fn new() -> Self {
        MemoryStrategyRepository {
            arena: Arena::new(),
        }
    }

    pub fn with_records(records: Vec<Strategy>) -> Self {
        MemoryStrategyRepository {
            arena: Arena::seeded(records.into_iter().map(|s| (s.id, s))),
        }
    }
}

impl Default for MemoryStrategyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StrategyRepositoryTrait for MemoryStrategyRepository {
    async fn get_all(&self) -> Result<Vec<Strategy>> {
        Ok(self.arena.all())
    }

    async fn get_by_id(&self, strategy_id: i64) -> Result<Strategy> {
        self.arena
            .get(strategy_id)
            .ok_or_else(|| not_found("Strategy", strategy_id))
    }

    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Strategy>> {
        Ok(self
            .arena
            .all()
            .into_iter()
            .filter(|s| s.client_id == client_id)
            .collect())
    }

    async fn create(&self, new_strategy: NewStrategy) -> Result<Strategy> {
        Ok(self.arena.insert_with(|id| Strategy {
            id,
            client_id: new_strategy.client_id,
            name: new_strategy.name.clone(),
            goal: new_strategy.goal.clone(),
            allocated_budget: new_strategy.allocated_budget,
            target_audience: new_strategy.target_audience.clone(),
            kpi: new_strategy.kpi.clone(),
            status: StrategyStatus::Active,
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, strategy_update: StrategyUpdate) -> Result<Strategy> {
        let id = required_id(strategy_update.id)?;
        let existing = self
            .arena
            .get(id)
            .ok_or_else(|| not_found("Strategy", id))?;

        let updated = Strategy {
            id,
            client_id: existing.client_id,
            name: strategy_update.name,
            goal: strategy_update.goal,
            allocated_budget: strategy_update.allocated_budget,
            target_audience: strategy_update.target_audience,
            kpi: strategy_update.kpi,
            status: strategy_update.status,
            created_at: existing.created_at,
        };
        self.arena.replace(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, strategy_id: i64) -> Result<bool> {
        if self.arena.remove(strategy_id) {
            Ok(true)
        } else {
            Err(not_found("Strategy", strategy_id))
        }
    }
}
