mod order;

use anyhow::Result;
use axum::{Json, http::StatusCode, response::IntoResponse};
use shared::{domain::responses::ErrorResponse, state::AppState, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(order::submit_order, order::query_orders),
    tags(
        (name = "Order", description = "Order intake and sales reporting endpoints"),
    )
)]
struct ApiDoc;

/// A wrong method on a known path still answers with a structured body, not
/// a bare 405.
async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ErrorResponse::message("Method not allowed")),
    )
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router =
            OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(order_routes(shared_state));

        let (app_router, api) = api_router.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .method_not_allowed_fallback(method_not_allowed)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
