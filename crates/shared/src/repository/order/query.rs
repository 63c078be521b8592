use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::OrderFilters,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderStats},
};
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Builds the filtered listing query. Date bounds are bound as text and cast
/// in the database, so a malformed date fails the query instead of being
/// reinterpreted here.
fn build_find_all_query(filters: &OrderFilters) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM orders WHERE 1=1");

    if let Some(category) = &filters.service_category {
        builder.push(" AND service_category = ").push_bind(category);
    }

    if let Some(status) = &filters.order_status {
        builder.push(" AND order_status = ").push_bind(status);
    }

    if let Some(date_from) = &filters.date_from {
        builder
            .push(" AND order_date >= ")
            .push_bind(date_from)
            .push("::timestamp");
    }

    if let Some(date_to) = &filters.date_to {
        builder
            .push(" AND order_date <= ")
            .push_bind(date_to)
            .push("::timestamp");
    }

    builder.push(" ORDER BY order_date DESC");

    if let Some(limit) = filters.limit {
        builder.push(" LIMIT ").push_bind(limit);
    }

    builder
}

const STATS_SQL: &str = r#"
SELECT
    COUNT(*) AS total_orders,
    COALESCE(SUM(amount), 0) AS total_revenue,
    COALESCE(AVG(amount), 0) AS average_order_value,
    COUNT(*) FILTER (WHERE order_status = 'pending') AS pending_orders,
    COUNT(*) FILTER (WHERE order_status = 'confirmed') AS confirmed_orders,
    COUNT(*) FILTER (WHERE order_status = 'in_production') AS production_orders,
    COUNT(*) FILTER (WHERE order_status = 'ready') AS ready_orders,
    COUNT(*) FILTER (WHERE order_status = 'delivered') AS delivered_orders
FROM orders
"#;

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, filters: &OrderFilters) -> Result<Vec<OrderModel>, RepositoryError> {
        info!("🔍 Fetching orders with filters: {:?}", filters);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let mut query = build_find_all_query(filters);

        let orders = query
            .build_query_as::<OrderModel>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(orders)
    }

    async fn stats(&self) -> Result<OrderStats, RepositoryError> {
        info!("📊 Fetching order statistics");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let stats = sqlx::query_as::<_, OrderStats>(STATS_SQL)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order statistics: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(stats)
    }
}
