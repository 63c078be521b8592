use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
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
    pub order_status: String,
    pub files_count: i32,
    pub order_date: Option<NaiveDateTime>,
}

/// Single-row aggregate over the orders table: totals plus a count per
/// fulfillment status.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderStats {
    pub total_orders: i64,
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub pending_orders: i64,
    pub confirmed_orders: i64,
    pub production_orders: i64,
    pub ready_orders: i64,
    pub delivered_orders: i64,
}
