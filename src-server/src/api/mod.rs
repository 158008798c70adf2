pub mod custom_fields;
pub mod dashboard;
pub mod investments;
pub mod investors;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{DeleteResponse, Investor, InvestorUpdate, NewInvestor},
};

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

/// Liveness/version message served at the API root.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Investment Tracking API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        investors::list_investors,
        investors::create_investor,
        investors::get_investor,
        investors::update_investor,
        investors::delete_investor,
    ),
    components(schemas(Investor, NewInvestor, InvestorUpdate, DeleteResponse)),
    tags((name = "investfolio"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(investors::router())
        .merge(investments::router())
        .merge(custom_fields::router())
        .merge(dashboard::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
