use crate::{middleware::jwt::auth_middleware, state::AppState};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynReportService},
    domain::{
        requests::{RestockRequest, SalesHistoryQuery, TopSalesQuery},
        responses::{
            ApiResponse, ProductStatsResponse, RestockResponse, SalesHistoryResponse,
            TopProductResponse,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/sales/top",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(TopSalesQuery),
    responses(
        (status = 200, description = "Best selling products", body = ApiResponse<Vec<TopProductResponse>>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn admin_top_sales(
    Extension(service): Extension<DynReportService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<TopSalesQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.top_sales(user_id, params.limit).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/sales/history",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(SalesHistoryQuery),
    responses(
        (status = 200, description = "Order item history, newest first", body = ApiResponse<Vec<SalesHistoryResponse>>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn admin_sales_history(
    Extension(service): Extension<DynReportService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<SalesHistoryQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.sales_history(user_id, params.product_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/{id}/stats",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product statistics", body = ApiResponse<ProductStatsResponse>),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn admin_product_stats(
    Extension(service): Extension<DynReportService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.product_stats(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/products/{id}/restock",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = RestockRequest,
    responses(
        (status = 200, description = "Stock increased", body = ApiResponse<RestockResponse>),
        (status = 400, description = "Amount must be positive"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn admin_restock(
    Extension(service): Extension<DynProductCommandService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
    Json(req): Json<RestockRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.restock(user_id, id, &req).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/sales/top", get(admin_top_sales))
        .route("/api/admin/sales/history", get(admin_sales_history))
        .route("/api/admin/products/{id}/stats", get(admin_product_stats))
        .route("/api/admin/products/{id}/restock", patch(admin_restock))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.report_service.clone()))
        .layer(Extension(
            app_state.di_container.product_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
