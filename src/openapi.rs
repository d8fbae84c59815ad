//! OpenAPI document for the HTTP surface, served as raw JSON.

use crate::handlers::AppState;
use axum::{response::Json, routing::get, Router};
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Northwind API",
        description = "CRUD and reporting endpoints over the classic Northwind retail schema"
    ),
    components(schemas(
        crate::entities::product::Model,
        crate::entities::order::Model,
        crate::entities::order_detail::Model,
        crate::entities::customer::Model,
        crate::entities::category::Model,
        crate::entities::supplier::Model,
        crate::entities::shipper::Model,
        crate::services::catalog::ProductSearchResult,
        crate::services::catalog::StockRecord,
        crate::services::catalog::StockSummary,
        crate::services::invoices::Invoice,
        crate::services::invoices::InvoiceLine,
        crate::services::revenue::RevenueBucket,
        crate::handlers::categories::CreateCategoryRequest,
        crate::handlers::imports::UploadMessage,
        crate::handlers::imports::CustomerUploadResponse,
        crate::errors::ErrorResponse,
        crate::HealthResponse,
    )),
    tags(
        (name = "products", description = "Catalog search and stock reporting"),
        (name = "orders", description = "Invoice assembly and order detail listings"),
        (name = "revenue", description = "Revenue aggregation by period"),
        (name = "imports", description = "CSV bulk ingestion"),
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
