use crate::{
    domain::requests::CreateSalesTransaction, errors::RepositoryError,
    model::SalesTransaction as SalesTransactionModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSalesCommandRepository = Arc<dyn SalesCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SalesCommandRepositoryTrait {
    async fn create_transaction(
        &self,
        tx: &CreateSalesTransaction,
    ) -> Result<SalesTransactionModel, RepositoryError>;
}
