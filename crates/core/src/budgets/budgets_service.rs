use log::{debug, warn};
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

use super::allocator;
use super::budgets_model::{
    Allocation, Budget, BudgetSummary, BudgetUpdate, NewBudget, UtilizationTier,
};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::activities::{ActivityServiceTrait, NewActivityEntry};
use crate::clients::ClientRepositoryTrait;
use crate::errors::Result;
use crate::strategies::StrategyRepositoryTrait;

/// Service for managing budgets and their allocations.
///
/// All allocation arithmetic is delegated to the [`allocator`] functions;
/// this service adds persistence, referential checks, and activity logging
/// around them.
pub struct BudgetService {
    repository: Arc<dyn BudgetRepositoryTrait>,
    clients: Arc<dyn ClientRepositoryTrait>,
    strategies: Arc<dyn StrategyRepositoryTrait>,
    activities: Arc<dyn ActivityServiceTrait>,
}

impl BudgetService {
    pub fn new(
        repository: Arc<dyn BudgetRepositoryTrait>,
        clients: Arc<dyn ClientRepositoryTrait>,
        strategies: Arc<dyn StrategyRepositoryTrait>,
        activities: Arc<dyn ActivityServiceTrait>,
    ) -> Self {
        BudgetService {
            repository,
            clients,
            strategies,
            activities,
        }
    }
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn get_budgets(&self) -> Result<Vec<Budget>> {
        self.repository.get_all().await
    }

    async fn get_budget(&self, budget_id: i64) -> Result<Budget> {
        self.repository.get_by_id(budget_id).await
    }

    async fn get_budgets_by_client(&self, client_id: i64) -> Result<Vec<Budget>> {
        self.repository.get_by_client_id(client_id).await
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        new_budget.validate()?;

        let client = self.clients.get_by_id(new_budget.client_id).await?;
        debug!(
            "Creating {:?} budget of {} for client '{}'",
            new_budget.period, new_budget.total, client.name
        );

        // A fresh budget starts with the entire total unallocated.
        let allocations = allocator::finalize(&[], new_budget.total);
        let budget = self.repository.create(new_budget, allocations).await?;

        let entry = NewActivityEntry::new(
            "Created new budget",
            "Budget",
            budget.id,
            json!({
                "clientName": client.name,
                "totalBudget": budget.total,
                "period": budget.period,
            }),
        );
        if let Err(e) = self.activities.log(entry).await {
            warn!("Failed to record activity for budget {}: {}", budget.id, e);
        }

        Ok(budget)
    }

    async fn update_budget(&self, budget_update: BudgetUpdate) -> Result<Budget> {
        budget_update.validate()?;
        let budget_id = budget_update.id.unwrap_or_default();
        let existing = self.repository.get_by_id(budget_id).await?;

        // A shrunk total must still cover the named allocations.
        let vetted = allocator::vet(&existing.allocations, budget_update.total)?;
        let allocations = allocator::finalize(&vetted, budget_update.total);

        self.repository
            .update(Budget {
                total: budget_update.total,
                period: budget_update.period,
                allocations,
                ..existing
            })
            .await
    }

    async fn set_allocations(&self, budget_id: i64, segments: Vec<Allocation>) -> Result<Budget> {
        let existing = self.repository.get_by_id(budget_id).await?;

        let vetted = allocator::vet(&segments, existing.total)?;
        let allocations = allocator::finalize(&vetted, existing.total);
        debug!(
            "Budget {}: persisting {} allocations, {} allocated of {}",
            budget_id,
            allocations.len(),
            allocator::allocated_total(&allocations),
            existing.total
        );

        self.repository
            .update(Budget {
                allocations,
                ..existing
            })
            .await
    }

    async fn allocate_to_strategy(
        &self,
        budget_id: i64,
        strategy_id: i64,
        amount: Decimal,
    ) -> Result<Budget> {
        let existing = self.repository.get_by_id(budget_id).await?;
        let strategy = self.strategies.get_by_id(strategy_id).await?;

        let named: Vec<Allocation> = existing
            .allocations
            .iter()
            .filter(|a| a.is_named())
            .cloned()
            .collect();
        let with_strategy = allocator::add_strategy_allocation(
            &named,
            existing.total,
            &strategy.name,
            amount,
            strategy_id,
        )?;
        let allocations = allocator::finalize(&with_strategy, existing.total);

        debug!(
            "Budget {}: earmarked {} for strategy '{}'",
            budget_id, amount, strategy.name
        );
        self.repository
            .update(Budget {
                allocations,
                ..existing
            })
            .await
    }

    async fn delete_budget(&self, budget_id: i64) -> Result<bool> {
        debug!("Deleting budget {}", budget_id);
        self.repository.delete(budget_id).await
    }

    fn summarize(&self, budget: &Budget, spent: Decimal) -> BudgetSummary {
        let allocated = allocator::allocated_total(&budget.allocations);
        let utilization = allocator::utilization(&budget.allocations, budget.total);
        BudgetSummary {
            budget_id: budget.id,
            total: budget.total,
            allocated,
            unallocated: budget.total - allocated,
            spent,
            remaining: allocated - spent,
            utilization,
            tier: UtilizationTier::from_percent(utilization),
        }
    }
}
