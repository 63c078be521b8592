use crate::{
    abstract_trait::{DynSalesQueryRepository, SalesQueryServiceTrait},
    domain::{
        requests::SalesPeriod,
        responses::{CategoryTotals, OthersBreakdownResponse, SalesAnalyticsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct SalesQueryService {
    query: DynSalesQueryRepository,
}

impl SalesQueryService {
    pub fn new(query: DynSalesQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl SalesQueryServiceTrait for SalesQueryService {
    /// The fixed-shape map drops categories the dashboard does not know;
    /// `raw_data` keeps the grouped rows untouched.
    async fn analytics(&self, period: SalesPeriod) -> Result<SalesAnalyticsResponse, ServiceError> {
        let rows = self.query.totals_by_category(period).await?;

        Ok(SalesAnalyticsResponse {
            success: true,
            data: CategoryTotals::from_rows(&rows),
            raw_data: rows,
        })
    }

    async fn others_breakdown(&self) -> Result<OthersBreakdownResponse, ServiceError> {
        let rows = self.query.others_breakdown().await?;

        Ok(OthersBreakdownResponse {
            success: true,
            data: rows,
        })
    }
}
