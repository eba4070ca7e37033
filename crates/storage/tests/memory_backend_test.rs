//! End-to-end tests: core services wired to the in-memory backend.

use std::sync::Arc;

use adledger_core::activities::{ActivityService, ActivityServiceTrait};
use adledger_core::budgets::{
    Allocation, AllocationKind, BudgetPeriod, BudgetService, BudgetServiceTrait, NewBudget,
};
use adledger_core::campaigns::{
    CampaignService, CampaignServiceTrait, CampaignStatus, NewCampaign, Platform,
};
use adledger_core::clients::{ClientService, ClientServiceTrait, NewClient};
use adledger_core::reporting::{ReportingService, ReportingServiceTrait};
use adledger_core::strategies::{NewStrategy, StrategyService, StrategyServiceTrait};
use adledger_storage::memory::SeedData;
use adledger_storage::{Repositories, StorageConfig};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

struct Stack {
    clients: Arc<ClientService>,
    budgets: Arc<BudgetService>,
    strategies: Arc<StrategyService>,
    campaigns: Arc<CampaignService>,
    activities: Arc<ActivityService>,
}

fn stack(repos: Repositories) -> Stack {
    let activities = Arc::new(ActivityService::new(repos.activities.clone()));
    let clients = Arc::new(ClientService::new(repos.clients.clone(), activities.clone()));
    let budgets = Arc::new(BudgetService::new(
        repos.budgets.clone(),
        repos.clients.clone(),
        repos.strategies.clone(),
        activities.clone(),
    ));
    let strategies = Arc::new(StrategyService::new(
        repos.strategies.clone(),
        repos.clients.clone(),
        activities.clone(),
    ));
    let campaigns = Arc::new(CampaignService::new(
        repos.campaigns.clone(),
        repos.strategies.clone(),
        repos.budgets.clone(),
        activities.clone(),
    ));
    Stack {
        clients,
        budgets,
        strategies,
        campaigns,
        activities,
    }
}

fn empty_stack() -> Stack {
    let repos = Repositories::connect(&StorageConfig::Memory).unwrap();
    stack(repos)
}

fn new_client(name: &str, total_budget: Decimal) -> NewClient {
    NewClient {
        name: name.to_string(),
        dealership_type: "Family".to_string(),
        location: "Austin, TX".to_string(),
        contact_name: "Pat Lee".to_string(),
        contact_email: "pat@example.com".to_string(),
        contact_phone: "555-0100".to_string(),
        total_budget,
        budget_period: BudgetPeriod::Monthly,
    }
}

fn segment(name: &str, amount: Decimal) -> Allocation {
    Allocation {
        id: 0,
        kind: AllocationKind::Segment,
        name: name.to_string(),
        amount,
        strategy_id: None,
    }
}

#[tokio::test]
async fn test_budget_lifecycle_against_memory_backend() {
    let stack = empty_stack();

    let client = stack
        .clients
        .create_client(new_client("Summit Motors", dec!(50000)))
        .await
        .unwrap();
    assert_eq!(client.id, 1);

    let budget = stack
        .budgets
        .create_budget(NewBudget {
            client_id: client.id,
            total: dec!(10000),
            period: BudgetPeriod::Monthly,
        })
        .await
        .unwrap();
    assert_eq!(budget.allocations.len(), 1);
    assert_eq!(budget.allocations[0].kind, AllocationKind::Unallocated);
    assert_eq!(budget.allocations[0].amount, dec!(10000));

    // 4000 fits, a further 7000 does not, 6000 exactly fills the budget.
    let budget = stack
        .budgets
        .set_allocations(budget.id, vec![segment("Social", dec!(4000))])
        .await
        .unwrap();
    assert!(stack
        .budgets
        .set_allocations(
            budget.id,
            vec![segment("Social", dec!(4000)), segment("Search", dec!(7000))],
        )
        .await
        .is_err());

    let budget = stack
        .budgets
        .set_allocations(
            budget.id,
            vec![segment("Social", dec!(4000)), segment("Search", dec!(6000))],
        )
        .await
        .unwrap();
    assert_eq!(budget.allocations.len(), 2);
    assert!(budget.allocations.iter().all(|a| a.is_named()));

    let summary = stack.budgets.summarize(&budget, Decimal::ZERO);
    assert_eq!(summary.allocated, dec!(10000));
    assert_eq!(summary.utilization, dec!(100));

    // The failed attempt must not have leaked into storage.
    let persisted = stack.budgets.get_budget(budget.id).await.unwrap();
    assert_eq!(persisted, budget);
}

#[tokio::test]
async fn test_missing_parent_records_are_rejected() {
    let stack = empty_stack();

    let err = stack
        .budgets
        .create_budget(NewBudget {
            client_id: 404,
            total: dec!(1000),
            period: BudgetPeriod::Monthly,
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert!(stack.budgets.get_budget(404).await.unwrap_err().is_not_found());
    assert!(stack
        .clients
        .delete_client(404)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_strategy_allocation_and_campaign_creation() {
    let stack = empty_stack();

    let client = stack
        .clients
        .create_client(new_client("Valley Auto", dec!(20000)))
        .await
        .unwrap();
    let budget = stack
        .budgets
        .create_budget(NewBudget {
            client_id: client.id,
            total: dec!(20000),
            period: BudgetPeriod::Monthly,
        })
        .await
        .unwrap();
    let strategy = stack
        .strategies
        .create_strategy(NewStrategy {
            client_id: client.id,
            name: "Lead Gen Q4".to_string(),
            goal: "40 qualified leads per month".to_string(),
            allocated_budget: dec!(8000),
            target_audience: "Truck owners".to_string(),
            kpi: "Leads".to_string(),
        })
        .await
        .unwrap();

    let budget = stack
        .budgets
        .allocate_to_strategy(budget.id, strategy.id, dec!(8000))
        .await
        .unwrap();
    let slice = budget
        .allocations
        .iter()
        .find(|a| a.kind == AllocationKind::Strategy)
        .unwrap();
    assert_eq!(slice.name, "Lead Gen Q4");
    assert_eq!(slice.strategy_id, Some(strategy.id));

    let campaign = stack
        .campaigns
        .create_campaign(NewCampaign {
            strategy_id: strategy.id,
            budget_id: budget.id,
            name: "Truck Month".to_string(),
            platform: Platform::Facebook,
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::days(30),
        })
        .await
        .unwrap();
    assert_eq!(campaign.spent, Decimal::ZERO);
    assert_eq!(campaign.status, CampaignStatus::Active);

    let by_client = stack
        .campaigns
        .get_campaigns_by_client(client.id)
        .await
        .unwrap();
    assert_eq!(by_client.len(), 1);
    assert_eq!(by_client[0].id, campaign.id);
}

#[tokio::test]
async fn test_mutations_append_to_the_activity_feed() {
    let stack = empty_stack();

    stack
        .clients
        .create_client(new_client("Summit Motors", dec!(50000)))
        .await
        .unwrap();
    stack
        .budgets
        .create_budget(NewBudget {
            client_id: 1,
            total: dec!(10000),
            period: BudgetPeriod::Monthly,
        })
        .await
        .unwrap();

    let feed = stack.activities.get_activities().await.unwrap();
    assert_eq!(feed.len(), 2);

    let recent = stack.activities.get_recent(1).await.unwrap();
    assert_eq!(recent.len(), 1);
    // Newest first.
    assert_eq!(recent[0].action, "Created new budget");
    assert_eq!(recent[0].entity_type, "Budget");
}

#[tokio::test]
async fn test_seeded_backend_serves_consistent_reports() {
    let stack = stack(Repositories::memory_seeded(SeedData::demo()));

    let clients = stack.clients.get_active_clients().await.unwrap();
    assert_eq!(clients.len(), 2);

    let budget = stack.budgets.get_budget(1).await.unwrap();
    let allocated: Decimal = budget.allocations.iter().map(|a| a.amount).sum();
    assert_eq!(allocated, budget.total);

    let reporting = ReportingService::new(
        stack.clients.clone(),
        stack.budgets.clone(),
        stack.campaigns.clone(),
    );
    let summary = reporting.dashboard_summary().await.unwrap();
    assert_eq!(summary.active_clients, 2);
    assert_eq!(summary.active_campaigns, 1);
    assert_eq!(summary.total_spent, dec!(6400));

    let pacing = reporting.client_pacing().await.unwrap();
    assert_eq!(pacing.len(), 2);
    assert_eq!(pacing[0].client_name, "Summit Motors");
    assert_eq!(pacing[0].total_spent, dec!(6400));

    // Seeded ids are continued, not reused.
    let next = stack
        .clients
        .create_client(new_client("New Dealer", dec!(5000)))
        .await
        .unwrap();
    assert_eq!(next.id, 3);
}
