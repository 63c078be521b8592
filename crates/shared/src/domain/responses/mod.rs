mod api;
mod order;
mod report;

pub use self::api::ErrorResponse;
pub use self::order::{OrderListResponse, OrderResponse, SubmitOrderResponse};
pub use self::report::{
    CategoryTotals, OrderStatsResponse, OthersBreakdownResponse, SalesAnalyticsResponse,
};
