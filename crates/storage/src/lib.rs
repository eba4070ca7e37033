//! Storage backends for AdLedger.
//!
//! This crate implements the repository traits defined in `adledger-core`
//! against two interchangeable record stores:
//! - An in-memory arena, used for local development and tests
//! - A remote record-management HTTP service
//!
//! # Architecture
//!
//! This crate is the only place in the application where a concrete backend
//! exists. Everything else works with the core traits, so the backend is
//! selected once by [`StorageConfig`] and never leaks past
//! [`Repositories::connect`].
//!
//! ```text
//!          core (domain services)
//!                   │
//!                   ▼
//!          storage (this crate)
//!              │         │
//!              ▼         ▼
//!        memory arena  remote record store
//! ```

pub mod backend;
pub mod config;
pub mod errors;
pub mod memory;
pub mod remote;

mod util;

pub use backend::Repositories;
pub use config::StorageConfig;
pub use errors::StorageError;

// Re-export from adledger-core for convenience
pub use adledger_core::errors::{Error, Result, StoreError};
