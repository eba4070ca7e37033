//! Remote backend: the record-management HTTP service behind the core
//! repository traits. One [`RemoteApi`] is shared by every repository.

mod api;
mod model;

mod activities;
mod budgets;
mod campaigns;
mod clients;
mod strategies;

pub use api::RemoteApi;

pub use activities::RemoteActivityRepository;
pub use budgets::RemoteBudgetRepository;
pub use campaigns::RemoteCampaignRepository;
pub use clients::RemoteClientRepository;
pub use strategies::RemoteStrategyRepository;
