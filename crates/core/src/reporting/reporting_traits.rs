use async_trait::async_trait;

use super::reporting_model::{BudgetOverview, ClientPacing, DashboardSummary};
use crate::errors::Result;

/// Trait defining the contract for read-only reporting operations.
#[async_trait]
pub trait ReportingServiceTrait: Send + Sync {
    async fn dashboard_summary(&self) -> Result<DashboardSummary>;
    async fn budget_overview(&self) -> Result<BudgetOverview>;
    async fn client_pacing(&self) -> Result<Vec<ClientPacing>>;
}
