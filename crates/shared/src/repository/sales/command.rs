use crate::{
    abstract_trait::SalesCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateSalesTransaction, errors::RepositoryError,
    model::SalesTransaction as SalesTransactionModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct SalesCommandRepository {
    db: ConnectionPool,
}

impl SalesCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SalesCommandRepositoryTrait for SalesCommandRepository {
    async fn create_transaction(
        &self,
        tx: &CreateSalesTransaction,
    ) -> Result<SalesTransactionModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, SalesTransactionModel>(
            r#"
            INSERT INTO sales_transactions (
                transaction_type, category, service, amount,
                customer, description, order_id
            ) VALUES (
                'customer_order', $1, $2, $3,
                $4, $5, $6
            )
            RETURNING *
            "#,
        )
        .bind(&tx.category)
        .bind(&tx.service)
        .bind(tx.amount)
        .bind(&tx.customer)
        .bind(&tx.description)
        .bind(tx.order_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert sales transaction for order {}: {:?}",
                tx.order_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Logged sales transaction {} for order {}",
            result.transaction_id, result.order_id
        );
        Ok(result)
    }
}
