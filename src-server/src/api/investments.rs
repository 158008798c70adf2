use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::DeleteResponse};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use investfolio_core::investments::{Investment, InvestmentUpdate, NewInvestment};

#[derive(Debug, Deserialize)]
pub struct InvestmentsQuery {
    #[serde(rename = "investorId")]
    investor_id: Option<String>,
}

async fn list_investments(
    State(state): State<Arc<AppState>>,
    Query(q): Query<InvestmentsQuery>,
) -> ApiResult<Json<Vec<Investment>>> {
    let investments = state
        .investment_service
        .list_investments(q.investor_id.as_deref())?;
    Ok(Json(investments))
}

async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<Json<Investment>> {
    let created = state.investment_service.create_investment(payload).await?;
    Ok(Json(created))
}

async fn get_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Investment>> {
    let investment = state.investment_service.get_investment(&id)?;
    Ok(Json(investment))
}

async fn update_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InvestmentUpdate>,
) -> ApiResult<Json<Investment>> {
    let updated = state
        .investment_service
        .update_investment(&id, payload)
        .await?;
    Ok(Json(updated))
}

async fn delete_investment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteResponse>> {
    state.investment_service.delete_investment(&id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Investment deleted successfully".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/investments",
            get(list_investments).post(create_investment),
        )
        .route(
            "/investments/{id}",
            get(get_investment)
                .put(update_investment)
                .delete(delete_investment),
        )
}
