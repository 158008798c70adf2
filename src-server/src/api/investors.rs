use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{DeleteResponse, Investor, InvestorUpdate, NewInvestor},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

#[utoipa::path(get, path="/api/v1/investors", responses((status=200, body = [Investor])))]
pub async fn list_investors(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Investor>>> {
    let investors = state.investor_service.get_all_investors()?;
    Ok(Json(investors.into_iter().map(Investor::from).collect()))
}

#[utoipa::path(post, path="/api/v1/investors", request_body = NewInvestor, responses((status=200, body = Investor)))]
pub async fn create_investor(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewInvestor>,
) -> ApiResult<Json<Investor>> {
    let created = state
        .investor_service
        .create_investor(payload.into())
        .await?;
    Ok(Json(Investor::from(created)))
}

#[utoipa::path(get, path="/api/v1/investors/{id}", responses((status=200, body = Investor)))]
pub async fn get_investor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Investor>> {
    let investor = state.investor_service.get_investor(&id)?;
    Ok(Json(Investor::from(investor)))
}

#[utoipa::path(put, path="/api/v1/investors/{id}", request_body = InvestorUpdate, responses((status=200, body = Investor)))]
pub async fn update_investor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InvestorUpdate>,
) -> ApiResult<Json<Investor>> {
    let updated = state
        .investor_service
        .update_investor(&id, payload.into())
        .await?;
    Ok(Json(Investor::from(updated)))
}

#[utoipa::path(delete, path="/api/v1/investors/{id}", responses((status=200, body = DeleteResponse)))]
pub async fn delete_investor(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state.investor_service.delete_investor(&id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Investor {} deleted successfully", deleted.name),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investors", get(list_investors).post(create_investor))
        .route(
            "/investors/{id}",
            get(get_investor)
                .put(update_investor)
                .delete(delete_investor),
        )
}
