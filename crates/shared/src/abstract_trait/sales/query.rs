use crate::{
    domain::{
        requests::SalesPeriod,
        responses::{OthersBreakdownResponse, SalesAnalyticsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{CategorySales, ServiceSales},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSalesQueryRepository = Arc<dyn SalesQueryRepositoryTrait + Send + Sync>;
pub type DynSalesQueryService = Arc<dyn SalesQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SalesQueryRepositoryTrait {
    async fn totals_by_category(
        &self,
        period: SalesPeriod,
    ) -> Result<Vec<CategorySales>, RepositoryError>;
    async fn others_breakdown(&self) -> Result<Vec<ServiceSales>, RepositoryError>;
}

#[async_trait]
pub trait SalesQueryServiceTrait {
    async fn analytics(&self, period: SalesPeriod) -> Result<SalesAnalyticsResponse, ServiceError>;
    async fn others_breakdown(&self) -> Result<OthersBreakdownResponse, ServiceError>;
}
