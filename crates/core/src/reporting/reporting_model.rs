//! Aggregated figures for the dashboard, budgets, and pacing pages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline metrics shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub active_campaigns: usize,
    pub active_clients: usize,
}

/// Roll-up across all budgets for the budget-management page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub total_budgets: Decimal,
    pub total_allocated: Decimal,
    pub budget_count: usize,
}

/// Per-client budget-vs-spend figures for the pacing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPacing {
    pub client_id: i64,
    pub client_name: String,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    /// Spend as a percentage of the client budget; zero for zero budgets.
    pub spend_rate: Decimal,
}
