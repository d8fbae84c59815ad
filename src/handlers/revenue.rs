use crate::{errors::ServiceError, handlers::AppState, services::revenue::RevenuePeriod};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Revenue report at daily, monthly or yearly granularity
async fn revenue_by_period(
    State(state): State<Arc<AppState>>,
    Path(time_period): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let period: RevenuePeriod = time_period.parse()?;
    let buckets = state.services.revenue.revenue_by_period(period).await?;
    Ok(Json(buckets))
}

pub fn revenue_routes() -> Router<Arc<AppState>> {
    Router::new().route("/revenue/:time_period", get(revenue_by_period))
}
