//! Budgets module - allocation builder, domain models, services, and traits.

pub mod allocator;

mod budgets_errors;
mod budgets_model;
mod budgets_service;
mod budgets_traits;

#[cfg(test)]
mod allocator_tests;


pub use budgets_errors::AllocationError;
pub use budgets_model::{
    Allocation, AllocationKind, Budget, BudgetPeriod, BudgetSummary, BudgetUpdate, NewBudget,
    UtilizationTier,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
