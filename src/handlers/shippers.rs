use super::common::SkipLimitParams;
use crate::{errors::ServiceError, handlers::AppState};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

async fn list_shippers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SkipLimitParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let shippers = state
        .services
        .shippers
        .list_shippers(params.skip, params.limit)
        .await?;
    Ok(Json(shippers))
}

async fn get_shipper(
    State(state): State<Arc<AppState>>,
    Path(shipper_id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let shipper = state.services.shippers.get_shipper(shipper_id).await?;
    Ok(Json(shipper))
}

pub fn shipper_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shippers", get(list_shippers))
        .route("/shippers/:shipper_id", get(get_shipper))
}
