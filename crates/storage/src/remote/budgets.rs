use adledger_core::budgets::{Allocation, Budget, BudgetRepositoryTrait, NewBudget};
use adledger_core::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::api::RemoteApi;
use super::model::{BudgetRecord, BudgetUpdateRecord, NewBudgetRecord};

pub struct RemoteBudgetRepository {
    api: Arc<RemoteApi>,
}

impl RemoteBudgetRepository {
    pub fn new(api: Arc<RemoteApi>) -> Self {
        RemoteBudgetRepository { api }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for RemoteBudgetRepository {
    async fn get_all(&self) -> Result<Vec<Budget>> {
        let records: Vec<BudgetRecord> = self.api.get_json("budgets").await?;
        Ok(records.into_iter().map(Budget::from).collect())
    }

    async fn get_by_id(&self, budget_id: i64) -> Result<Budget> {
        let record: BudgetRecord = self.api.get_json(&format!("budgets/{budget_id}")).await?;
        Ok(Budget::from(record))
    }

    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Budget>> {
        // The store has no filtered endpoint; filter the listing here.
        let budgets = self.get_all().await?;
        Ok(budgets
            .into_iter()
            .filter(|b| b.client_id == client_id)
            .collect())
    }

    async fn create(&self, new_budget: NewBudget, allocations: Vec<Allocation>) -> Result<Budget> {
        let record: BudgetRecord = self
            .api
            .post_json(
                "budgets",
                &NewBudgetRecord::from_parts(new_budget, allocations),
            )
            .await?;
        Ok(Budget::from(record))
    }

    async fn update(&self, budget: Budget) -> Result<Budget> {
        let id = budget.id;
        let record: BudgetRecord = self
            .api
            .put_json(&format!("budgets/{id}"), &BudgetUpdateRecord::from(budget))
            .await?;
        Ok(Budget::from(record))
    }

    async fn delete(&self, budget_id: i64) -> Result<bool> {
        self.api.delete(&format!("budgets/{budget_id}")).await?;
        Ok(true)
    }
}
