use futures::try_join;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::reporting_model::{BudgetOverview, ClientPacing, DashboardSummary};
use super::reporting_traits::ReportingServiceTrait;
use crate::budgets::{allocator, BudgetServiceTrait};
use crate::campaigns::{CampaignServiceTrait, CampaignStatus};
use crate::clients::{ClientServiceTrait, ClientStatus};
use crate::errors::Result;

/// Read-only aggregation over the other services.
///
/// Collaborator fetches for a single report are independent and awaited
/// together; each call works on its own snapshot of the data.
pub struct ReportingService {
    clients: Arc<dyn ClientServiceTrait>,
    budgets: Arc<dyn BudgetServiceTrait>,
    campaigns: Arc<dyn CampaignServiceTrait>,
}

impl ReportingService {
    pub fn new(
        clients: Arc<dyn ClientServiceTrait>,
        budgets: Arc<dyn BudgetServiceTrait>,
        campaigns: Arc<dyn CampaignServiceTrait>,
    ) -> Self {
        ReportingService {
            clients,
            budgets,
            campaigns,
        }
    }
}

#[async_trait::async_trait]
impl ReportingServiceTrait for ReportingService {
    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let (clients, campaigns) =
            try_join!(self.clients.get_clients(), self.campaigns.get_campaigns())?;

        Ok(DashboardSummary {
            total_budget: clients.iter().map(|c| c.total_budget).sum(),
            total_spent: campaigns.iter().map(|c| c.spent).sum(),
            active_campaigns: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .count(),
            active_clients: clients
                .iter()
                .filter(|c| c.status == ClientStatus::Active)
                .count(),
        })
    }

    async fn budget_overview(&self) -> Result<BudgetOverview> {
        let budgets = self.budgets.get_budgets().await?;

        Ok(BudgetOverview {
            total_budgets: budgets.iter().map(|b| b.total).sum(),
            total_allocated: budgets
                .iter()
                .map(|b| allocator::allocated_total(&b.allocations))
                .sum(),
            budget_count: budgets.len(),
        })
    }

    async fn client_pacing(&self) -> Result<Vec<ClientPacing>> {
        let clients = self.clients.get_clients().await?;

        let mut pacing = Vec::with_capacity(clients.len());
        for client in clients {
            let campaigns = self.campaigns.get_campaigns_by_client(client.id).await?;
            let total_spent: Decimal = campaigns.iter().map(|c| c.spent).sum();
            let spend_rate = if client.total_budget > Decimal::ZERO {
                total_spent / client.total_budget * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            pacing.push(ClientPacing {
                client_id: client.id,
                client_name: client.name,
                total_budget: client.total_budget,
                total_spent,
                spend_rate,
            });
        }
        Ok(pacing)
    }
}
