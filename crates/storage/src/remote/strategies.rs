use adledger_core::errors::Result;
use adledger_core::strategies::{NewStrategy, Strategy, StrategyRepositoryTrait, StrategyUpdate};
use async_trait::async_trait;
use std::sync::Arc;

use super::api::RemoteApi;
use super::model::{NewStrategyRecord, StrategyRecord, StrategyUpdateRecord};
use crate::util::required_id;

pub struct RemoteStrategyRepository {
    api: Arc<RemoteApi>,
}

impl RemoteStrategyRepository {
    pub fn new(api: Arc<RemoteApi>) -> Self {
        RemoteStrategyRepository { api }
    }
}

#[async_trait]
impl StrategyRepositoryTrait for RemoteStrategyRepository {
    async fn get_all(&self) -> Result<Vec<Strategy>> {
        let records: Vec<StrategyRecord> = self.api.get_json("strategies").await?;
        Ok(records.into_iter().map(Strategy::from).collect())
    }

    async fn get_by_id(&self, strategy_id: i64) -> Result<Strategy> {
        let record: StrategyRecord = self
            .api
            .get_json(&format!("strategies/{strategy_id}"))
            .await?;
        Ok(Strategy::from(record))
    }

    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Strategy>> {
        let strategies = self.get_all().await?;
        Ok(strategies
            .into_iter()
            .filter(|s| s.client_id == client_id)
            .collect())
    }

    async fn create(&self, new_strategy: NewStrategy) -> Result<Strategy> {
        let record: StrategyRecord = self
            .api
            .post_json("strategies", &NewStrategyRecord::from(new_strategy))
            .await?;
        Ok(Strategy::from(record))
    }

    async fn update(&self, strategy_update: StrategyUpdate) -> Result<Strategy> {
        let id = required_id(strategy_update.id)?;
        let record: StrategyRecord = self
            .api
            .put_json(
                &format!("strategies/{id}"),
                &StrategyUpdateRecord::from(strategy_update),
            )
            .await?;
        Ok(Strategy::from(record))
    }

    async fn delete(&self, strategy_id: i64) -> Result<bool> {
        self.api.delete(&format!("strategies/{strategy_id}")).await?;
        Ok(true)
    }
}
