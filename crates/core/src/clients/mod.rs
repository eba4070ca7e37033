//! Clients module - domain models, services, and traits.

mod clients_model;
mod clients_service;
mod clients_traits;

#[cfg(test)]
mod clients_model_tests;

pub use clients_model::{Client, ClientStatus, ClientUpdate, NewClient};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
