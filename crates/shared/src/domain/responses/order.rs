use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::requests::SubmitOrderRequest, model::Order};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_category: String,
    pub service_name: String,
    pub size: String,
    pub quantity: i32,
    pub due_date: String,
    pub instructions: String,
    pub delivery_preference: String,
    pub amount: f64,
    pub base_price: f64,
    pub additional_charges: f64,
    pub order_status: String,
    pub files_count: i32,
    pub order_date: Option<String>,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            order_id: value.order_id,
            customer_name: value.customer_name,
            customer_email: value.customer_email,
            customer_phone: value.customer_phone,
            service_category: value.service_category,
            service_name: value.service_name,
            size: value.size,
            quantity: value.quantity,
            due_date: value.due_date.to_string(),
            instructions: value.instructions,
            delivery_preference: value.delivery_preference,
            amount: value.amount,
            base_price: value.base_price,
            additional_charges: value.additional_charges,
            order_status: value.order_status,
            files_count: value.files_count,
            order_date: value.order_date.map(|dt| dt.to_string()),
        }
    }
}

/// Acknowledgement of a submitted order. `order_id` is the human-facing
/// code, `order_db_id` the database identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: String,
    pub order_db_id: i32,
    pub amount: f64,
    pub data: SubmitOrderRequest,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub success: bool,
    pub data: Vec<OrderResponse>,
    pub count: i64,
}
