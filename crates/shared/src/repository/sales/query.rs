use crate::{
    abstract_trait::SalesQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::SalesPeriod,
    errors::RepositoryError,
    model::{CategorySales, ServiceSales},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SalesQueryRepository {
    db: ConnectionPool,
}

impl SalesQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// WHERE clause for the analytics window. `All` degenerates to a tautology
/// so the query shape stays identical across periods.
fn period_condition(period: SalesPeriod) -> &'static str {
    match period {
        SalesPeriod::Day => "transaction_date::date = CURRENT_DATE",
        SalesPeriod::Week => "transaction_date >= NOW() - INTERVAL '7 days'",
        SalesPeriod::Month => "date_trunc('month', transaction_date) = date_trunc('month', NOW())",
        SalesPeriod::Year => "date_part('year', transaction_date) = date_part('year', NOW())",
        SalesPeriod::All => "1=1",
    }
}

const OTHERS_BREAKDOWN_SQL: &str = r#"
SELECT
    service,
    SUM(amount) AS total_amount,
    COUNT(*) AS order_count
FROM sales_transactions
WHERE category = 'others'
GROUP BY service
ORDER BY total_amount DESC
"#;

#[async_trait]
impl SalesQueryRepositoryTrait for SalesQueryRepository {
    async fn totals_by_category(
        &self,
        period: SalesPeriod,
    ) -> Result<Vec<CategorySales>, RepositoryError> {
        info!("📈 Aggregating sales by category for {:?}", period);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!(
            "SELECT category, SUM(amount) AS total_amount, COUNT(*) AS transaction_count \
             FROM sales_transactions \
             WHERE {} \
             GROUP BY category \
             ORDER BY total_amount DESC",
            period_condition(period)
        );

        let rows = sqlx::query_as::<_, CategorySales>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to aggregate sales: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn others_breakdown(&self) -> Result<Vec<ServiceSales>, RepositoryError> {
        info!("🧾 Aggregating 'others' transactions by service");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, ServiceSales>(OTHERS_BREAKDOWN_SQL)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch others breakdown: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_period_maps_to_a_distinct_window() {
        assert_eq!(
            period_condition(SalesPeriod::Day),
            "transaction_date::date = CURRENT_DATE"
        );
        assert_eq!(
            period_condition(SalesPeriod::Week),
            "transaction_date >= NOW() - INTERVAL '7 days'"
        );
        assert!(period_condition(SalesPeriod::Month).contains("date_trunc('month'"));
        assert!(period_condition(SalesPeriod::Year).contains("date_part('year'"));
    }

    #[test]
    fn all_period_is_unfiltered() {
        assert_eq!(period_condition(SalesPeriod::All), "1=1");
    }
}
