use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};

use investfolio_core::dashboard::DashboardStats;

async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.get_dashboard_stats()?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard/stats", get(get_dashboard_stats))
}
