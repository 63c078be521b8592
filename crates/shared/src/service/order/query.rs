use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::OrderFilters,
        responses::{OrderListResponse, OrderResponse, OrderStatsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self, filters: &OrderFilters) -> Result<OrderListResponse, ServiceError> {
        let orders = self.query.find_all(filters).await?;
        let count = orders.len() as i64;

        Ok(OrderListResponse {
            success: true,
            data: orders.into_iter().map(OrderResponse::from).collect(),
            count,
        })
    }

    async fn stats(&self) -> Result<OrderStatsResponse, ServiceError> {
        let stats = self.query.stats().await?;

        Ok(OrderStatsResponse {
            success: true,
            data: stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderQueryRepositoryTrait,
        errors::RepositoryError,
        model::{Order, OrderStats},
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct FixedOrderRepo {
        orders: Vec<Order>,
    }

    fn order(id: i32, category: &str) -> Order {
        Order {
            order_id: id,
            customer_name: "Maria Santos".to_string(),
            customer_email: String::new(),
            customer_phone: String::new(),
            service_category: category.to_string(),
            service_name: category.to_string(),
            size: String::new(),
            quantity: 1,
            due_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            instructions: String::new(),
            delivery_preference: "pickup".to_string(),
            amount: 500.0,
            base_price: 500.0,
            additional_charges: 0.0,
            order_status: "pending".to_string(),
            files_count: 0,
            order_date: None,
        }
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for FixedOrderRepo {
        async fn find_all(&self, filters: &OrderFilters) -> Result<Vec<Order>, RepositoryError> {
            let rows = self
                .orders
                .iter()
                .filter(|o| {
                    filters
                        .service_category
                        .as_deref()
                        .is_none_or(|c| o.service_category == c)
                })
                .cloned()
                .collect();
            Ok(rows)
        }

        async fn stats(&self) -> Result<OrderStats, RepositoryError> {
            Ok(OrderStats {
                total_orders: self.orders.len() as i64,
                total_revenue: self.orders.iter().map(|o| o.amount).sum(),
                average_order_value: 500.0,
                pending_orders: self.orders.len() as i64,
                confirmed_orders: 0,
                production_orders: 0,
                ready_orders: 0,
                delivered_orders: 0,
            })
        }
    }

    #[tokio::test]
    async fn category_filter_returns_matching_rows_with_count() {
        let repo = Arc::new(FixedOrderRepo {
            orders: vec![order(1, "Shirts"), order(2, "Tarpaulin"), order(3, "Shirts")],
        });
        let service = OrderQueryService::new(repo);

        let filters = OrderFilters {
            service_category: Some("Shirts".into()),
            ..OrderFilters::default()
        };
        let response = service.find_all(&filters).await.unwrap();

        assert!(response.success);
        assert_eq!(response.count, 2);
        assert!(
            response
                .data
                .iter()
                .all(|o| o.service_category == "Shirts")
        );
    }

    #[tokio::test]
    async fn stats_wrap_the_aggregate_row() {
        let repo = Arc::new(FixedOrderRepo {
            orders: vec![order(1, "Shirts"), order(2, "Shirts")],
        });
        let service = OrderQueryService::new(repo);

        let response = service.stats().await.unwrap();
        assert!(response.success);
        assert_eq!(response.data.total_orders, 2);
        assert_eq!(response.data.total_revenue, 1000.0);
    }
}
