use log::{debug, warn};
use serde_json::json;
use std::sync::Arc;

use super::clients_model::{Client, ClientStatus, ClientUpdate, NewClient};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::activities::{ActivityServiceTrait, NewActivityEntry};
use crate::errors::Result;

/// Service for managing agency clients.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
    activities: Arc<dyn ActivityServiceTrait>,
}

impl ClientService {
    pub fn new(
        repository: Arc<dyn ClientRepositoryTrait>,
        activities: Arc<dyn ActivityServiceTrait>,
    ) -> Self {
        ClientService {
            repository,
            activities,
        }
    }
}

#[async_trait::async_trait]
impl ClientServiceTrait for ClientService {
    async fn get_clients(&self) -> Result<Vec<Client>> {
        self.repository.get_all().await
    }

    async fn get_active_clients(&self) -> Result<Vec<Client>> {
        let clients = self.repository.get_all().await?;
        Ok(clients
            .into_iter()
            .filter(|c| c.status == ClientStatus::Active)
            .collect())
    }

    async fn get_client(&self, client_id: i64) -> Result<Client> {
        self.repository.get_by_id(client_id).await
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        new_client.validate()?;
        debug!("Creating client '{}'", new_client.name);

        let client = self.repository.create(new_client).await?;

        let entry = NewActivityEntry::new(
            "Created new client",
            "Client",
            client.id,
            json!({
                "clientName": client.name,
                "totalBudget": client.total_budget,
                "budgetPeriod": client.budget_period,
            }),
        );
        if let Err(e) = self.activities.log(entry).await {
            warn!("Failed to record activity for client {}: {}", client.id, e);
        }

        Ok(client)
    }

    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client> {
        client_update.validate()?;
        self.repository.update(client_update).await
    }

    async fn delete_client(&self, client_id: i64) -> Result<bool> {
        debug!("Deleting client {}", client_id);
        self.repository.delete(client_id).await
    }
}
