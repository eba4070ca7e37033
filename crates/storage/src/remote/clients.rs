use adledger_core::clients::{Client, ClientRepositoryTrait, ClientUpdate, NewClient};
use adledger_core::errors::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::api::RemoteApi;
use super::model::{ClientRecord, ClientUpdateRecord, NewClientRecord};
use crate::util::required_id;

pub struct RemoteClientRepository {
    api: Arc<RemoteApi>,
}

impl RemoteClientRepository {
    pub fn new(api: Arc<RemoteApi>) -> Self {
        RemoteClientRepository { api }
    }
}

#[async_trait]
impl ClientRepositoryTrait for RemoteClientRepository {
    async fn get_all(&self) -> Result<Vec<Client>> {
        let records: Vec<ClientRecord> = self.api.get_json("clients").await?;
        Ok(records.into_iter().map(Client::from).collect())
    }

    async fn get_by_id(&self, client_id: i64) -> Result<Client> {
        let record: ClientRecord = self.api.get_json(&format!("clients/{client_id}")).await?;
        Ok(Client::from(record))
    }

    async fn create(&self, new_client: NewClient) -> Result<Client> {
        let record: ClientRecord = self
            .api
            .post_json("clients", &NewClientRecord::from(new_client))
            .await?;
        Ok(Client::from(record))
    }

    async fn update(&self, client_update: ClientUpdate) -> Result<Client> {
        let id = required_id(client_update.id)?;
        let record: ClientRecord = self
            .api
            .put_json(
                &format!("clients/{id}"),
                &ClientUpdateRecord::from(client_update),
            )
            .await?;
        Ok(Client::from(record))
    }

    async fn delete(&self, client_id: i64) -> Result<bool> {
        self.api.delete(&format!("clients/{client_id}")).await?;
        Ok(true)
    }
}
