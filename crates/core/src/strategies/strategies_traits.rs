use async_trait::async_trait;

use super::strategies_model::{NewStrategy, Strategy, StrategyUpdate};
use crate::errors::Result;

/// Trait defining the contract for Strategy repository operations.
#[async_trait]
pub trait StrategyRepositoryTrait: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Strategy>>;
    async fn get_by_id(&self, strategy_id: i64) -> Result<Strategy>;
    async fn get_by_client_id(&self, client_id: i64) -> Result<Vec<Strategy>>;
    async fn create(&self, new_strategy: NewStrategy) -> Result<Strategy>;
    async fn update(&self, strategy_update: StrategyUpdate) -> Result<Strategy>;
    async fn delete(&self, strategy_id: i64) -> Result<bool>;
}

/// Trait defining the contract for Strategy service operations.
#[async_trait]
pub trait StrategyServiceTrait: Send + Sync {
    async fn get_strategies(&self) -> Result<Vec<Strategy>>;
    async fn get_strategy(&self, strategy_id: i64) -> Result<Strategy>;
    async fn get_strategies_by_client(&self, client_id: i64) -> Result<Vec<Strategy>>;
    async fn create_strategy(&self, new_strategy: NewStrategy) -> Result<Strategy>;
    async fn update_strategy(&self, strategy_update: StrategyUpdate) -> Result<Strategy>;
    async fn delete_strategy(&self, strategy_id: i64) -> Result<bool>;
}
