//! Backend selection and repository wiring.

use adledger_core::activities::ActivityRepositoryTrait;
use adledger_core::budgets::BudgetRepositoryTrait;
use adledger_core::campaigns::CampaignRepositoryTrait;
use adledger_core::clients::ClientRepositoryTrait;
use adledger_core::errors::Result;
use adledger_core::strategies::StrategyRepositoryTrait;
use log::info;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::memory::{
    MemoryActivityRepository, MemoryBudgetRepository, MemoryCampaignRepository,
    MemoryClientRepository, MemoryStrategyRepository, SeedData,
};
use crate::remote::{
    RemoteActivityRepository, RemoteApi, RemoteBudgetRepository, RemoteCampaignRepository,
    RemoteClientRepository, RemoteStrategyRepository,
};

/// The full set of repository handles for one backend.
///
/// Services only ever see these trait objects; which backend sits behind them
/// is decided once, here.
#[derive(Clone)]
pub struct Repositories {
    pub clients: Arc<dyn ClientRepositoryTrait>,
    pub budgets: Arc<dyn BudgetRepositoryTrait>,
    pub strategies: Arc<dyn StrategyRepositoryTrait>,
    pub campaigns: Arc<dyn CampaignRepositoryTrait>,
    pub activities: Arc<dyn ActivityRepositoryTrait>,
}

impl Repositories {
    /// Wires up the backend the configuration names.
    pub fn connect(config: &StorageConfig) -> Result<Self> {
        match config {
            StorageConfig::Memory => {
                info!("Using in-memory record store");
                Ok(Self::memory())
            }
            StorageConfig::Remote { base_url } => {
                info!("Using remote record store at {base_url}");
                Self::remote(base_url)
            }
        }
    }

    /// Empty in-memory backend.
    pub fn memory() -> Self {
        Self::memory_seeded(SeedData::default())
    }

    /// In-memory backend pre-loaded with the given records.
    pub fn memory_seeded(seed: SeedData) -> Self {
        Repositories {
            clients: Arc::new(MemoryClientRepository::with_records(seed.clients)),
            budgets: Arc::new(MemoryBudgetRepository::with_records(seed.budgets)),
            strategies: Arc::new(MemoryStrategyRepository::with_records(seed.strategies)),
            campaigns: Arc::new(MemoryCampaignRepository::with_records(seed.campaigns)),
            activities: Arc::new(MemoryActivityRepository::with_records(seed.activities)),
        }
    }

    /// Remote backend; every repository shares one HTTP client.
    pub fn remote(base_url: &str) -> Result<Self> {
        let api = Arc::new(RemoteApi::new(base_url)?);
        Ok(Repositories {
            clients: Arc::new(RemoteClientRepository::new(api.clone())),
            budgets: Arc::new(RemoteBudgetRepository::new(api.clone())),
            strategies: Arc::new(RemoteStrategyRepository::new(api.clone())),
            campaigns: Arc::new(RemoteCampaignRepository::new(api.clone())),
            activities: Arc::new(RemoteActivityRepository::new(api)),
        })
    }
}
