//! AdLedger Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the AdLedger agency
//! dashboard: clients, budgets and their allocations, strategies, campaigns,
//! and the activity log. It is storage-agnostic and defines traits that are
//! implemented by the `adledger-storage` crate.

pub mod activities;
pub mod budgets;
pub mod campaigns;
pub mod clients;
pub mod constants;
pub mod errors;
pub mod reporting;
pub mod strategies;

// Re-export the allocator types used throughout the budget surface
pub use budgets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::StoreError;
