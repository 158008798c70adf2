use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::DeleteResponse};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use investfolio_core::custom_fields::{CustomFieldConfig, EntityType, NewCustomFieldConfig};

async fn create_custom_field(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewCustomFieldConfig>,
) -> ApiResult<Json<CustomFieldConfig>> {
    let created = state
        .custom_field_service
        .create_custom_field(payload)
        .await?;
    Ok(Json(created))
}

async fn list_custom_fields(
    Path(entity_type): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CustomFieldConfig>>> {
    let entity_type: EntityType = entity_type.parse()?;
    let configs = state.custom_field_service.get_custom_fields(entity_type)?;
    Ok(Json(configs))
}

async fn delete_custom_field(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteResponse>> {
    state.custom_field_service.delete_custom_field(&id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Custom field deleted successfully".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/custom-fields", post(create_custom_field))
        // One parameterized segment serves both lookups: entity type on GET,
        // config id on DELETE.
        .route(
            "/custom-fields/{key}",
            get(list_custom_fields).delete(delete_custom_field),
        )
}
