//! Wire models for the remote record store.
//!
//! The service keys every record by a capital `Id` field and uses camelCase
//! for everything else. These structs own that quirk; domain models never see
//! it.

use adledger_core::activities::{ActivityEntry, NewActivityEntry};
use adledger_core::budgets::{Allocation, Budget, BudgetPeriod, NewBudget};
use adledger_core::campaigns::{Campaign, CampaignStatus, NewCampaign, Platform};
use adledger_core::clients::{Client, ClientStatus, ClientUpdate, NewClient};
use adledger_core::strategies::{NewStrategy, Strategy, StrategyStatus, StrategyUpdate};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Clients ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    pub budget_period: BudgetPeriod,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

impl From<ClientRecord> for Client {
    fn from(record: ClientRecord) -> Self {
        Client {
            id: record.id,
            name: record.name,
            dealership_type: record.dealership_type,
            location: record.location,
            contact_name: record.contact_name,
            contact_email: record.contact_email,
            contact_phone: record.contact_phone,
            total_budget: record.total_budget,
            budget_period: record.budget_period,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// Create payload; the store assigns `Id`, `createdAt`, and the initial
/// `Active` status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClientRecord {
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    pub budget_period: BudgetPeriod,
}

impl From<NewClient> for NewClientRecord {
    fn from(new_client: NewClient) -> Self {
        NewClientRecord {
            name: new_client.name,
            dealership_type: new_client.dealership_type,
            location: new_client.location,
            contact_name: new_client.contact_name,
            contact_email: new_client.contact_email,
            contact_phone: new_client.contact_phone,
            total_budget: new_client.total_budget,
            budget_period: new_client.budget_period,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdateRecord {
    pub name: String,
    pub dealership_type: String,
    pub location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub total_budget: Decimal,
    pub budget_period: BudgetPeriod,
    pub status: ClientStatus,
}

impl From<ClientUpdate> for ClientUpdateRecord {
    fn from(update: ClientUpdate) -> Self {
        ClientUpdateRecord {
            name: update.name,
            dealership_type: update.dealership_type,
            location: update.location,
            contact_name: update.contact_name,
            contact_email: update.contact_email,
            contact_phone: update.contact_phone,
            total_budget: update.total_budget,
            budget_period: update.budget_period,
            status: update.status,
        }
    }
}

// --- Budgets ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub client_id: i64,
    pub total: Decimal,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    pub created_at: DateTime<Utc>,
}

impl From<BudgetRecord> for Budget {
    fn from(record: BudgetRecord) -> Self {
        Budget {
            id: record.id,
            client_id: record.client_id,
            total: record.total,
            period: record.period,
            allocations: record.allocations,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetRecord {
    pub client_id: i64,
    pub total: Decimal,
    pub period: BudgetPeriod,
    pub allocations: Vec<Allocation>,
}

impl NewBudgetRecord {
    pub fn from_parts(new_budget: NewBudget, allocations: Vec<Allocation>) -> Self {
        NewBudgetRecord {
            client_id: new_budget.client_id,
            total: new_budget.total,
            period: new_budget.period,
            allocations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdateRecord {
    pub client_id: i64,
    pub total: Decimal,
    pub period: BudgetPeriod,
    pub allocations: Vec<Allocation>,
}

impl From<Budget> for BudgetUpdateRecord {
    fn from(budget: Budget) -> Self {
        BudgetUpdateRecord {
            client_id: budget.client_id,
            total: budget.total,
            period: budget.period,
            allocations: budget.allocations,
        }
    }
}

// --- Strategies ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub client_id: i64,
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
    pub status: StrategyStatus,
    pub created_at: DateTime<Utc>,
}

impl From<StrategyRecord> for Strategy {
    fn from(record: StrategyRecord) -> Self {
        Strategy {
            id: record.id,
            client_id: record.client_id,
            name: record.name,
            goal: record.goal,
            allocated_budget: record.allocated_budget,
            target_audience: record.target_audience,
            kpi: record.kpi,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategyRecord {
    pub client_id: i64,
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
}

impl From<NewStrategy> for NewStrategyRecord {
    fn from(new_strategy: NewStrategy) -> Self {
        NewStrategyRecord {
            client_id: new_strategy.client_id,
            name: new_strategy.name,
            goal: new_strategy.goal,
            allocated_budget: new_strategy.allocated_budget,
            target_audience: new_strategy.target_audience,
            kpi: new_strategy.kpi,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyUpdateRecord {
    pub name: String,
    pub goal: String,
    pub allocated_budget: Decimal,
    pub target_audience: String,
    pub kpi: String,
    pub status: StrategyStatus,
}

impl From<StrategyUpdate> for StrategyUpdateRecord {
    fn from(update: StrategyUpdate) -> Self {
        StrategyUpdateRecord {
            name: update.name,
            goal: update.goal,
            allocated_budget: update.allocated_budget,
            target_audience: update.target_audience,
            kpi: update.kpi,
            status: update.status,
        }
    }
}

// --- Campaigns ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub strategy_id: i64,
    pub budget_id: i64,
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub spent: Decimal,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

impl From<CampaignRecord> for Campaign {
    fn from(record: CampaignRecord) -> Self {
        Campaign {
            id: record.id,
            strategy_id: record.strategy_id,
            budget_id: record.budget_id,
            name: record.name,
            platform: record.platform,
            start_date: record.start_date,
            end_date: record.end_date,
            spent: record.spent,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// Create payload; spend starts at zero and the status at `Active`, stated
/// explicitly because the store persists whatever it is given.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaignRecord {
    pub strategy_id: i64,
    pub budget_id: i64,
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub spent: Decimal,
    pub status: CampaignStatus,
}

impl From<NewCampaign> for NewCampaignRecord {
    fn from(new_campaign: NewCampaign) -> Self {
        NewCampaignRecord {
            strategy_id: new_campaign.strategy_id,
            budget_id: new_campaign.budget_id,
            name: new_campaign.name,
            platform: new_campaign.platform,
            start_date: new_campaign.start_date,
            end_date: new_campaign.end_date,
            spent: Decimal::ZERO,
            status: CampaignStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdateRecord {
    pub name: String,
    pub platform: Platform,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub spent: Decimal,
    pub status: CampaignStatus,
}

impl From<adledger_core::campaigns::CampaignUpdate> for CampaignUpdateRecord {
    fn from(update: adledger_core::campaigns::CampaignUpdate) -> Self {
        CampaignUpdateRecord {
            name: update.name,
            platform: update.platform,
            start_date: update.start_date,
            end_date: update.end_date,
            spent: update.spent,
            status: update.status,
        }
    }
}

// --- Activities ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    #[serde(default)]
    pub details: Value,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityRecord> for ActivityEntry {
    fn from(record: ActivityRecord) -> Self {
        ActivityEntry {
            id: record.id,
            user_id: record.user_id,
            action: record.action,
            entity_type: record.entity_type,
            entity_id: record.entity_id,
            details: record.details,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityRecord {
    pub user_id: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub details: Value,
}

impl From<NewActivityEntry> for NewActivityRecord {
    fn from(new_entry: NewActivityEntry) -> Self {
        NewActivityRecord {
            user_id: new_entry.user_id,
            action: new_entry.action,
            entity_type: new_entry.entity_type,
            entity_id: new_entry.entity_id,
            details: new_entry.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_carry_capital_id_on_the_wire() {
        let json = serde_json::json!({
            "Id": 4,
            "clientId": 1,
            "total": 10000.0,
            "period": "monthly",
            "allocations": [
                { "id": 1, "type": "segment", "name": "Social", "amount": 4000.0 },
                { "id": 2, "type": "unallocated", "name": "Unallocated Budget", "amount": 6000.0 }
            ],
            "createdAt": "2026-08-01T00:00:00Z"
        });

        let record: BudgetRecord = serde_json::from_value(json).unwrap();
        let budget = Budget::from(record);
        assert_eq!(budget.id, 4);
        assert_eq!(budget.allocations.len(), 2);
        assert_eq!(budget.allocations[0].name, "Social");
        assert!(budget.allocations[1].strategy_id.is_none());
    }

    #[test]
    fn test_new_campaign_record_starts_active_with_zero_spend() {
        let new_campaign = NewCampaign {
            strategy_id: 1,
            budget_id: 1,
            name: "Launch".to_string(),
            platform: Platform::Facebook,
            start_date: Utc::now(),
            end_date: Utc::now() + chrono::Duration::days(10),
        };
        let record = NewCampaignRecord::from(new_campaign);
        assert_eq!(record.spent, Decimal::ZERO);
        assert_eq!(record.status, CampaignStatus::Active);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "Active");
        assert!(json.get("Id").is_none());
    }
}
