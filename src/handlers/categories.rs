use crate::{errors::ServiceError, handlers::AppState};
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create a product category
async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    // Presence check happens here; emptiness and duplicates are the service's call
    let name = body.category_name.unwrap_or_default();
    let description = body.description.unwrap_or_default();

    let created = state
        .services
        .catalog
        .create_category(&name, &description)
        .await?;
    Ok(Json(created))
}

pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new().route("/category", post(create_category))
}
