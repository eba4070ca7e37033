//! Fixture records for the memory backend.

use adledger_core::activities::ActivityEntry;
use adledger_core::budgets::{Allocation, AllocationKind, Budget, BudgetPeriod};
use adledger_core::campaigns::{Campaign, CampaignStatus, Platform};
use adledger_core::clients::{Client, ClientStatus};
use adledger_core::constants::DEFAULT_ACTIVITY_ACTOR;
use adledger_core::strategies::{Strategy, StrategyStatus};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use serde_json::json;

/// Records to pre-load into the memory backend.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub clients: Vec<Client>,
    pub budgets: Vec<Budget>,
    pub strategies: Vec<Strategy>,
    pub campaigns: Vec<Campaign>,
    pub activities: Vec<ActivityEntry>,
}

impl SeedData {
    /// A small consistent data set for demos and exploratory testing: two
    /// clients, one budget with allocations, one strategy with a running
    /// campaign.
    pub fn demo() -> Self {
        let now = Utc::now();

        let clients = vec![
            Client {
                id: 1,
                name: "Summit Motors".to_string(),
                dealership_type: "Luxury".to_string(),
                location: "Denver, CO".to_string(),
                contact_name: "Dana Reyes".to_string(),
                contact_email: "dana@summitmotors.com".to_string(),
                contact_phone: "555-0134".to_string(),
                total_budget: Decimal::from(50_000),
                budget_period: BudgetPeriod::Monthly,
                status: ClientStatus::Active,
                created_at: now - Duration::days(90),
            },
            Client {
                id: 2,
                name: "Valley Auto Group".to_string(),
                dealership_type: "Family".to_string(),
                location: "Fresno, CA".to_string(),
                contact_name: "Sam Ortiz".to_string(),
                contact_email: "sam@valleyauto.com".to_string(),
                contact_phone: "555-0177".to_string(),
                total_budget: Decimal::from(20_000),
                budget_period: BudgetPeriod::Monthly,
                status: ClientStatus::Active,
                created_at: now - Duration::days(45),
            },
        ];

        let budgets = vec![Budget {
            id: 1,
            client_id: 1,
            total: Decimal::from(50_000),
            period: BudgetPeriod::Monthly,
            allocations: vec![
                Allocation {
                    id: 1,
                    kind: AllocationKind::Segment,
                    name: "Paid Search".to_string(),
                    amount: Decimal::from(20_000),
                    strategy_id: None,
                },
                Allocation {
                    id: 2,
                    kind: AllocationKind::Strategy,
                    name: "Q3 Brand Awareness".to_string(),
                    amount: Decimal::from(15_000),
                    strategy_id: Some(1),
                },
                Allocation {
                    id: 3,
                    kind: AllocationKind::Unallocated,
                    name: "Unallocated Budget".to_string(),
                    amount: Decimal::from(15_000),
                    strategy_id: None,
                },
            ],
            created_at: now - Duration::days(30),
        }];

        let strategies = vec![Strategy {
            id: 1,
            client_id: 1,
            name: "Q3 Brand Awareness".to_string(),
            goal: "Grow branded search volume 20%".to_string(),
            allocated_budget: Decimal::from(15_000),
            target_audience: "In-market SUV shoppers".to_string(),
            kpi: "Impressions".to_string(),
            status: StrategyStatus::Active,
            created_at: now - Duration::days(28),
        }];

        let campaigns = vec![Campaign {
            id: 1,
            strategy_id: 1,
            budget_id: 1,
            name: "SUV Summer Push".to_string(),
            platform: Platform::GoogleAds,
            start_date: now - Duration::days(21),
            end_date: now + Duration::days(9),
            spent: Decimal::from(6_400),
            status: CampaignStatus::Active,
            created_at: now - Duration::days(21),
        }];

        let activities = vec![ActivityEntry {
            id: 1,
            user_id: DEFAULT_ACTIVITY_ACTOR.to_string(),
            action: "Created new budget".to_string(),
            entity_type: "Budget".to_string(),
            entity_id: "1".to_string(),
            details: json!({
                "clientName": "Summit Motors",
                "totalBudget": 50000,
                "period": "monthly",
            }),
            timestamp: now - Duration::days(30),
        }];

        SeedData {
            clients,
            budgets,
            strategies,
            campaigns,
            activities,
        }
    }
}
