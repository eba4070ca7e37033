use adledger_core::clients::{Client, ClientRepositoryTrait, ClientStatus, ClientUpdate, NewClient};
use adledger_core::errors::Result;
use async_trait::async_trait;
use chrono::Utc;

use super::Arena;
use crate::util::{not_found, required_id};

pub struct MemoryClientRepository {
    arena: Arena<Client>,
}

impl MemoryClientRepository {
    pub fn new() -> Self {
        MemoryClientRepository {
            arena: Arena::new(),
        }
    }

    pub fn with_records(records: Vec<Client>) -> Self {
        MemoryClientRepository {
            arena: Arena::seeded(records.into_iter().map(|c| (c.id, c))),
        }
    }
}

impl Default for MemoryClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepositoryTrait for MemoryClientRepository {
    async fn get_all(&self) -> Result<Vec<Client>> {
        Ok(self.arena.all())
    }

    async fn get_by_id(&self, client_id: i64) -> Result<Client> {
        self.arena
            .get(client_id)
            .ok_or_else(|| not_found("Client", client_id))
    }

    async fn create(&self, new_client: NewClient) -> Result<Client> {
        Ok(self.arena.insert_with(|id| Client {
            id,
            name: new_client.name.clone(),
            dealership_type: new_client.dealership_type.clone(),
            location: new_client.location.clone(),
            contact_name: new_client.contact_name.clone(),
            contact_email: new_client.contact_email.clone(),
            contact_phone: new_client.contact_phone.clone(),
            total_budget: new_client.total_budget,
            budget_period: new_client.budget_period,
            status: ClientStatus::Active,
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, client_update: ClientUpdate) -> Result<Client> {
        let id = required_id(client_update.id)?;
        let existing = self.arena.get(id).ok_or_else(|| not_found("Client", id))?;

        let updated = Client {
            id,
            name: client_update.name,
            dealership_type: client_update.dealership_type,
            location: client_update.location,
            contact_name: client_update.contact_name,
            contact_email: client_update.contact_email,
            contact_phone: client_update.contact_phone,
            total_budget: client_update.total_budget,
            budget_period: client_update.budget_period,
            status: client_update.status,
            created_at: existing.created_at,
        };
        self.arena.replace(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, client_id: i64) -> Result<bool> {
        if self.arena.remove(client_id) {
            Ok(true)
        } else {
            Err(not_found("Client", client_id))
        }
    }
}
