//! Reporting module - read-only aggregation across the domain services.

mod reporting_model;
mod reporting_service;
mod reporting_traits;


pub use reporting_model::{BudgetOverview, ClientPacing, DashboardSummary};
pub use reporting_service::ReportingService;
pub use reporting_traits::ReportingServiceTrait;
