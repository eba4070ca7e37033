use async_trait::async_trait;
use rust_decimal::Decimal;

use super::budgets_model::{
    Allocation, Budget, BudgetSummary, BudgetUpdate, NewBudget,
};
use crate::errors::Result;

/// Trait defining the contract for Budget repository operations.
///
/// `create` takes the already-finalized allocation list so the invariant
/// (allocations sum to the total) is established by the service before
/// anything reaches persistence.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Budget>>;
    async fn get_by_id(&self, budget_id: i64) -> Result<Budget>;
    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Budget>>;
    async fn create(&self, new_budget: NewBudget, allocations: Vec<Allocation>) -> Result<Budget>;
    async fn update(&self, budget: Budget) -> Result<Budget>;
    async fn delete(&self, budget_id: i64) -> Result<bool>;
}

/// Trait defining the contract for Budget service operations.
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn get_budgets(&self) -> Result<Vec<Budget>>;
    async fn get_budget(&self, budget_id: i64) -> Result<Budget>;
    async fn get_budgets_by_client(&self, client_id: i64) -> Result<Vec<Budget>>;
    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    async fn update_budget(&self, budget_update: BudgetUpdate) -> Result<Budget>;
    /// Replaces the budget's named allocations after re-validating them
    /// against the ceiling, then recomputes the unallocated remainder.
    async fn set_allocations(&self, budget_id: i64, segments: Vec<Allocation>) -> Result<Budget>;
    /// Earmarks part of the budget for a strategy, same ceiling rules as a
    /// segment.
    async fn allocate_to_strategy(
        &self,
        budget_id: i64,
        strategy_id: i64,
        amount: Decimal,
    ) -> Result<Budget>;
    async fn delete_budget(&self, budget_id: i64) -> Result<bool>;
    /// Derives display figures; `spent` comes from campaign reporting and is
    /// never computed here.
    fn summarize(&self, budget: &Budget, spent: Decimal) -> BudgetSummary;
}
