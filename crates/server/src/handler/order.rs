use axum::{
    Json,
    extract::{
        Extension, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use shared::{
    domain::{
        requests::{ReportParams, SubmitOrderRequest},
        responses::{
            ErrorResponse, OrderListResponse, OrderStatsResponse, OthersBreakdownResponse,
            SalesAnalyticsResponse, SubmitOrderResponse,
        },
    },
    service::{OrderService, SalesService},
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Submission acknowledged or rejected", body = SubmitOrderResponse),
    )
)]
pub async fn submit_order(
    Extension(order_service): Extension<OrderService>,
    payload: Result<Json<SubmitOrderRequest>, JsonRejection>,
) -> Response {
    // a body that does not parse is rejected before any processing
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::OK,
            Json(ErrorResponse::message("Invalid JSON data")),
        )
            .into_response();
    };

    match order_service.command.submit_order(&req).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    params(ReportParams),
    responses(
        (status = 200, description = "Listing (action=orders)", body = OrderListResponse),
        (status = 200, description = "Category analytics (action=analytics)", body = SalesAnalyticsResponse),
        (status = 200, description = "Others breakdown (action=others_breakdown)", body = OthersBreakdownResponse),
        (status = 200, description = "Order statistics (action=stats)", body = OrderStatsResponse),
    )
)]
pub async fn query_orders(
    Extension(order_service): Extension<OrderService>,
    Extension(sales_service): Extension<SalesService>,
    params: Result<Query<ReportParams>, QueryRejection>,
) -> Response {
    // a query string that does not deserialize gets the same structured
    // treatment as a bad JSON body
    let Ok(Query(params)) = params else {
        return (
            StatusCode::OK,
            Json(ErrorResponse::message("Invalid query parameters")),
        )
            .into_response();
    };

    let action = params.action.as_deref().unwrap_or("orders");

    let result = match action {
        "orders" => order_service
            .query
            .find_all(&params.filters())
            .await
            .map(|r| Json(r).into_response()),
        "analytics" => sales_service
            .query
            .analytics(params.period())
            .await
            .map(|r| Json(r).into_response()),
        "others_breakdown" => sales_service
            .query
            .others_breakdown()
            .await
            .map(|r| Json(r).into_response()),
        "stats" => order_service
            .query
            .stats()
            .await
            .map(|r| Json(r).into_response()),
        _ => {
            return (StatusCode::OK, Json(ErrorResponse::message("Invalid action")))
                .into_response();
        }
    };

    match result {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(query_orders).post(submit_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.di_container.sales_service.clone()))
}
