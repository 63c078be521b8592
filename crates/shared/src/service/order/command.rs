use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynSalesCommandRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRecord, CreateSalesTransaction, SubmitOrderRequest},
        responses::SubmitOrderResponse,
    },
    errors::ServiceError,
    utils::generate_order_code,
};

use super::{pricing::calculate_pricing, validation::validate_order};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    sales_command: DynSalesCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, sales_command: DynSalesCommandRepository) -> Self {
        Self {
            command,
            sales_command,
        }
    }
}

/// Reporting key for a category: lower-cased with the " & " separator
/// removed, e.g. "Print & Xerox" becomes "printxerox".
fn sales_category_key(category: &str) -> String {
    category.replace(" & ", "").to_lowercase()
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    /// Linear pipeline: validate, price, insert the order row, then insert
    /// the derived sales transaction. The two inserts are intentionally not
    /// wrapped in a transaction; a failure on the second leaves the order
    /// row committed, which reporting tolerates.
    async fn submit_order(
        &self,
        req: &SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, ServiceError> {
        let errors = validate_order(req);
        if !errors.is_empty() {
            info!("🚫 Order rejected by validation: {:?}", errors);
            return Err(ServiceError::Validation(errors));
        }

        let pricing = calculate_pricing(req);
        let order_code = generate_order_code();

        let due_date_raw = req.due_date.as_deref().unwrap_or("");
        let due_date = NaiveDate::parse_from_str(due_date_raw, "%Y-%m-%d")
            .map_err(|_| ServiceError::Custom(format!("Invalid due date: {due_date_raw}")))?;

        let quantity = i32::try_from(req.quantity.unwrap_or(0))
            .map_err(|_| ServiceError::Custom("Quantity is out of range".to_string()))?;
        let files_count = i32::try_from(req.files_count.unwrap_or(0))
            .map_err(|_| ServiceError::Custom("Files count is out of range".to_string()))?;

        let category = req.service_category.clone().unwrap_or_default();
        let service_name = req
            .service_name
            .clone()
            .unwrap_or_else(|| category.clone());

        let record = CreateOrderRecord {
            customer_name: req.customer_name.clone().unwrap_or_default(),
            customer_email: req.customer_email.clone().unwrap_or_default(),
            customer_phone: req.customer_phone.clone().unwrap_or_default(),
            service_category: category.clone(),
            service_name: service_name.clone(),
            size: req.size.clone().unwrap_or_default(),
            quantity,
            due_date,
            instructions: req.instructions.clone().unwrap_or_default(),
            delivery_preference: req
                .delivery_preference
                .clone()
                .unwrap_or_else(|| "pickup".to_string()),
            amount: pricing.total,
            base_price: pricing.base_price,
            additional_charges: pricing.additional_charges,
            files_count,
        };

        let order = self.command.create_order(&record).await?;

        let description = if !service_name.is_empty() && service_name != category {
            format!("Order {order_code}: {category} - {service_name}")
        } else {
            format!("Order {order_code}: {category}")
        };

        let tx = CreateSalesTransaction {
            category: sales_category_key(&category),
            service: service_name,
            amount: pricing.total,
            customer: record.customer_name.clone(),
            description,
            order_id: order.order_id,
        };

        self.sales_command.create_transaction(&tx).await?;

        info!("✅ Order {} acknowledged as {}", order.order_id, order_code);

        Ok(SubmitOrderResponse {
            success: true,
            message: "Order submitted successfully".to_string(),
            order_id: order_code,
            order_db_id: order.order_id,
            amount: pricing.total,
            data: req.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{OrderCommandRepositoryTrait, SalesCommandRepositoryTrait},
        errors::RepositoryError,
        model::{Order, SalesTransaction},
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingOrderRepo {
        created: Mutex<Vec<CreateOrderRecord>>,
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for RecordingOrderRepo {
        async fn create_order(
            &self,
            record: &CreateOrderRecord,
        ) -> Result<Order, RepositoryError> {
            self.created.lock().unwrap().push(record.clone());
            Ok(Order {
                order_id: 42,
                customer_name: record.customer_name.clone(),
                customer_email: record.customer_email.clone(),
                customer_phone: record.customer_phone.clone(),
                service_category: record.service_category.clone(),
                service_name: record.service_name.clone(),
                size: record.size.clone(),
                quantity: record.quantity,
                due_date: record.due_date,
                instructions: record.instructions.clone(),
                delivery_preference: record.delivery_preference.clone(),
                amount: record.amount,
                base_price: record.base_price,
                additional_charges: record.additional_charges,
                order_status: "pending".to_string(),
                files_count: record.files_count,
                order_date: None,
            })
        }
    }

    #[derive(Default)]
    struct RecordingSalesRepo {
        created: Mutex<Vec<CreateSalesTransaction>>,
        fail: bool,
    }

    #[async_trait]
    impl SalesCommandRepositoryTrait for RecordingSalesRepo {
        async fn create_transaction(
            &self,
            tx: &CreateSalesTransaction,
        ) -> Result<SalesTransaction, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Custom("insert failed".to_string()));
            }
            self.created.lock().unwrap().push(tx.clone());
            Ok(SalesTransaction {
                transaction_id: 7,
                transaction_type: "customer_order".to_string(),
                category: tx.category.clone(),
                service: tx.service.clone(),
                amount: tx.amount,
                customer: tx.customer.clone(),
                description: tx.description.clone(),
                order_id: tx.order_id,
                transaction_date: None,
            })
        }
    }

    fn service(
        orders: Arc<RecordingOrderRepo>,
        sales: Arc<RecordingSalesRepo>,
    ) -> OrderCommandService {
        OrderCommandService::new(orders, sales)
    }

    fn shirts_request() -> SubmitOrderRequest {
        SubmitOrderRequest {
            customer_name: Some("Maria Santos".into()),
            customer_email: Some("maria@example.com".into()),
            customer_phone: None,
            service_category: Some("Shirts".into()),
            service_name: None,
            size: None,
            quantity: Some(5),
            due_date: Some("2025-04-15".into()),
            instructions: None,
            delivery_preference: Some("pickup".into()),
            files_count: None,
        }
    }

    #[tokio::test]
    async fn valid_order_writes_one_order_and_one_transaction() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo::default());

        let response = service(orders.clone(), sales.clone())
            .submit_order(&shirts_request())
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.order_db_id, 42);
        assert_eq!(response.amount, 500.0);
        assert!(response.order_id.starts_with("ORD-"));

        let created_orders = orders.created.lock().unwrap();
        assert_eq!(created_orders.len(), 1);
        assert_eq!(created_orders[0].amount, 500.0);
        assert_eq!(created_orders[0].base_price, 500.0);
        assert_eq!(created_orders[0].additional_charges, 0.0);
        // service name falls back to the category
        assert_eq!(created_orders[0].service_name, "Shirts");

        let created_sales = sales.created.lock().unwrap();
        assert_eq!(created_sales.len(), 1);
        assert_eq!(created_sales[0].category, "shirts");
        assert_eq!(created_sales[0].amount, 500.0);
        assert_eq!(created_sales[0].order_id, 42);
    }

    #[tokio::test]
    async fn validation_failure_writes_nothing() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo::default());

        let req = SubmitOrderRequest {
            customer_name: None,
            ..shirts_request()
        };

        let err = service(orders.clone(), sales.clone())
            .submit_order(&req)
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(errors) => {
                assert!(errors.contains(&"Customer name is required".to_string()));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert!(orders.created.lock().unwrap().is_empty());
        assert!(sales.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_transaction_insert_leaves_the_order_row_committed() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo {
            fail: true,
            ..RecordingSalesRepo::default()
        });

        let err = service(orders.clone(), sales.clone())
            .submit_order(&shirts_request())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
        // no compensation: the order insert is not rolled back
        assert_eq!(orders.created.lock().unwrap().len(), 1);
        assert!(sales.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparseable_due_date_fails_before_any_write() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo::default());

        let req = SubmitOrderRequest {
            due_date: Some("next friday".into()),
            ..shirts_request()
        };

        let err = service(orders.clone(), sales.clone())
            .submit_order(&req)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Custom(_)));
        assert!(orders.created.lock().unwrap().is_empty());
        assert!(sales.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn files_count_beyond_the_column_range_fails_before_any_write() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo::default());

        let req = SubmitOrderRequest {
            files_count: Some(i64::from(i32::MAX) + 1),
            ..shirts_request()
        };

        let err = service(orders.clone(), sales.clone())
            .submit_order(&req)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Custom(_)));
        assert!(orders.created.lock().unwrap().is_empty());
        assert!(sales.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn description_embeds_code_and_distinct_service_name() {
        let orders = Arc::new(RecordingOrderRepo::default());
        let sales = Arc::new(RecordingSalesRepo::default());

        let req = SubmitOrderRequest {
            service_category: Some("Others".into()),
            service_name: Some("Mug printing".into()),
            ..shirts_request()
        };

        let response = service(orders.clone(), sales.clone())
            .submit_order(&req)
            .await
            .unwrap();

        let created_sales = sales.created.lock().unwrap();
        assert_eq!(created_sales[0].category, "others");
        assert_eq!(created_sales[0].service, "Mug printing");
        assert_eq!(
            created_sales[0].description,
            format!("Order {}: Others - Mug printing", response.order_id)
        );
    }

    #[test]
    fn category_keys_lowercase_and_strip_the_ampersand() {
        assert_eq!(sales_category_key("Print & Xerox"), "printxerox");
        assert_eq!(sales_category_key("Tarpaulin"), "tarpaulin");
        assert_eq!(sales_category_key("Shirts"), "shirts");
    }
}
