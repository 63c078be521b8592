use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw order submission payload. Every field is optional at the wire level;
/// the validator decides which ones are actually required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitOrderRequest {
    #[schema(example = "Juan dela Cruz")]
    pub customer_name: Option<String>,

    #[schema(example = "juan@example.com")]
    pub customer_email: Option<String>,

    #[schema(example = "+63 912 345 6789")]
    pub customer_phone: Option<String>,

    #[schema(example = "Tarpaulin")]
    pub service_category: Option<String>,

    #[schema(example = "Birthday banner")]
    pub service_name: Option<String>,

    #[schema(example = "3ft x 5ft")]
    pub size: Option<String>,

    #[schema(example = 1)]
    pub quantity: Option<i64>,

    #[schema(example = "2025-04-15")]
    pub due_date: Option<String>,

    pub instructions: Option<String>,

    #[schema(example = "pickup")]
    pub delivery_preference: Option<String>,

    #[schema(example = 0)]
    pub files_count: Option<i64>,
}

/// Fully resolved order row, ready for insertion. Defaults have been applied
/// and pricing has been computed server-side.
#[derive(Debug, Clone)]
pub struct CreateOrderRecord {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_category: String,
    pub service_name: String,
    pub size: String,
    pub quantity: i32,
    pub due_date: NaiveDate,
    pub instructions: String,
    pub delivery_preference: String,
    pub amount: f64,
    pub base_price: f64,
    pub additional_charges: f64,
    pub files_count: i32,
}

/// Sales transaction derived from a freshly inserted order.
#[derive(Debug, Clone)]
pub struct CreateSalesTransaction {
    pub category: String,
    pub service: String,
    pub amount: f64,
    pub customer: String,
    pub description: String,
    pub order_id: i32,
}

/// Optional filters for the order listing. Date bounds are passed through to
/// the database as-is and cast there, so a malformed date surfaces as a
/// query error rather than a silent mismatch.
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub service_category: Option<String>,
    pub order_status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub limit: Option<i64>,
}
