use crate::{
    abstract_trait::OrderCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateOrderRecord, errors::RepositoryError, model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        record: &CreateOrderRecord,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (
                customer_name, customer_email, customer_phone,
                service_category, service_name, size, quantity,
                due_date, instructions, delivery_preference,
                amount, base_price, additional_charges,
                order_status, files_count
            ) VALUES (
                $1, $2, $3,
                $4, $5, $6, $7,
                $8, $9, $10,
                $11, $12, $13,
                'pending', $14
            )
            RETURNING *
            "#,
        )
        .bind(&record.customer_name)
        .bind(&record.customer_email)
        .bind(&record.customer_phone)
        .bind(&record.service_category)
        .bind(&record.service_name)
        .bind(&record.size)
        .bind(record.quantity)
        .bind(record.due_date)
        .bind(&record.instructions)
        .bind(&record.delivery_preference)
        .bind(record.amount)
        .bind(record.base_price)
        .bind(record.additional_charges)
        .bind(record.files_count)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert order for {}: {:?}",
                record.customer_name, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order ID {} ({} x{})",
            result.order_id, result.service_category, result.quantity
        );
        Ok(result)
    }
}
