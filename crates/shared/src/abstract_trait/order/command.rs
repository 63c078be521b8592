use crate::{
    domain::{
        requests::{CreateOrderRecord, SubmitOrderRequest},
        responses::SubmitOrderResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, record: &CreateOrderRecord)
    -> Result<OrderModel, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn submit_order(
        &self,
        req: &SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, ServiceError>;
}
