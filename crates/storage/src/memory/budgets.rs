use adledger_core::budgets::{Allocation, Budget, BudgetRepositoryTrait, NewBudget};
use adledger_core::errors::Result;
use async_trait::async_trait;
use chrono::Utc;

use super::Arena;
use crate::util::not_found;

pub struct MemoryBudgetRepository {
    arena: Arena<Budget>,
}

impl MemoryBudgetRepository {
    pub fn new() -> Self {
        MemoryBudgetRepository {
            arena: Arena::new(),
        }
    }

    pub fn with_records(records: Vec<Budget>) -> Self {
        MemoryBudgetRepository {
            arena: Arena::seeded(records.into_iter().map(|b| (b.id, b))),
        }
    }
}

impl Default for MemoryBudgetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BudgetRepositoryTrait for MemoryBudgetRepository {
    async fn get_all(&self) -> Result<Vec<Budget>> {
        Ok(self.arena.all())
    }

    async fn get_by_id(&self, budget_id: i64) -> Result<Budget> {
        self.arena
            .get(budget_id)
            .ok_or_else(|| not_found("Budget", budget_id))
    }

    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Budget>> {
        Ok(self
            .arena
            .all()
            .into_iter()
            .filter(|b| b.client_id == client_id)
            .collect())
    }

    async fn create(&self, new_budget: NewBudget, allocations: Vec<Allocation>) -> Result<Budget> {
        Ok(self.arena.insert_with(|id| Budget {
            id,
            client_id: new_budget.client_id,
            total: new_budget.total,
            period: new_budget.period,
            allocations: allocations.clone(),
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, budget: Budget) -> Result<Budget> {
        if !self.arena.replace(budget.id, budget.clone()) {
            return Err(not_found("Budget", budget.id));
        }
        Ok(budget)
    }

    async fn delete(&self, budget_id: i64) -> Result<bool> {
        if self.arena.remove(budget_id) {
            Ok(true)
        } else {
            Err(not_found("Budget", budget_id))
        }
    }
}
