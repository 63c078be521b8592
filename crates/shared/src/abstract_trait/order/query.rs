use crate::{
    domain::{
        requests::OrderFilters,
        responses::{OrderListResponse, OrderStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderStats},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, filters: &OrderFilters) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn stats(&self) -> Result<OrderStats, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, filters: &OrderFilters) -> Result<OrderListResponse, ServiceError>;
    async fn stats(&self) -> Result<OrderStatsResponse, ServiceError>;
}
