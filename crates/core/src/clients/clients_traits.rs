use async_trait::async_trait;

use super::clients_model::{Client, ClientUpdate, NewClient};
use crate::errors::Result;

/// Trait defining the contract for Client repository operations.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Client>>;
    async fn get_by_id(&self, client_id: i64) -> Result<Client>;
    async fn create(&self, new_client: NewClient) -> Result<Client>;
    async fn update(&self, client_update: ClientUpdate) -> Result<Client>;
    async fn delete(&self, client_id: i64) -> Result<bool>;
}

/// Trait defining the contract for Client service operations.
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    async fn get_clients(&self) -> Result<Vec<Client>>;
    async fn get_active_clients(&self) -> Result<Vec<Client>>;
    async fn get_client(&self, client_id: i64) -> Result<Client>;
    async fn create_client(&self, new_client: NewClient) -> Result<Client>;
    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client>;
    async fn delete_client(&self, client_id: i64) -> Result<bool>;
}
