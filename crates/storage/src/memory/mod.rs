//! In-memory backend: one [`Arena`] per entity behind the core repository
//! traits. Used for local development and tests; supports seeding with
//! fixture records.

mod arena;
mod seed;

mod activities;
mod budgets;
mod campaigns;
mod clients;
mod strategies;

pub use arena::Arena;
pub use seed::SeedData;

pub use activities::MemoryActivityRepository;
pub use budgets::MemoryBudgetRepository;
pub use campaigns::MemoryCampaignRepository;
pub use clients::MemoryClientRepository;
pub use strategies::MemoryStrategyRepository;
