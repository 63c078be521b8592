use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalesTransaction {
    pub transaction_id: i32,
    pub transaction_type: String,
    pub category: String,
    pub service: String,
    pub amount: f64,
    pub customer: String,
    pub description: String,
    pub order_id: i32,
    pub transaction_date: Option<NaiveDateTime>,
}

/// Per-category aggregate of sales transactions within a period window.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategorySales {
    pub category: String,
    pub total_amount: f64,
    pub transaction_count: i64,
}

/// Per-service aggregate used for the "Others" category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceSales {
    pub service: String,
    pub total_amount: f64,
    pub order_count: i64,
}
