use std::sync::Arc;

use crate::config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use investfolio_core::{
    custom_fields::{CustomFieldRepository, CustomFieldService, CustomFieldServiceTrait},
    dashboard::{DashboardRepository, DashboardService, DashboardServiceTrait},
    db,
    investments::{InvestmentRepository, InvestmentService, InvestmentServiceTrait},
    investors::{InvestorRepository, InvestorService, InvestorServiceTrait},
};

pub struct AppState {
    pub investor_service: Arc<dyn InvestorServiceTrait + Send + Sync>,
    pub investment_service: Arc<dyn InvestmentServiceTrait + Send + Sync>,
    pub custom_field_service: Arc<dyn CustomFieldServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let investor_repository = Arc::new(InvestorRepository::new(pool.clone()));
    let investment_repository = Arc::new(InvestmentRepository::new(pool.clone()));
    let custom_field_repository = Arc::new(CustomFieldRepository::new(pool.clone()));
    let dashboard_repository = Arc::new(DashboardRepository::new(pool.clone()));

    let investor_service = Arc::new(InvestorService::new(
        investor_repository.clone(),
        investment_repository.clone(),
        custom_field_repository.clone(),
        pool.clone(),
    ));
    let investment_service = Arc::new(InvestmentService::new(
        investment_repository.clone(),
        investor_repository.clone(),
        custom_field_repository.clone(),
    ));
    let custom_field_service = Arc::new(CustomFieldService::new(custom_field_repository));
    let dashboard_service = Arc::new(DashboardService::new(dashboard_repository));

    Ok(Arc::new(AppState {
        investor_service,
        investment_service,
        custom_field_service,
        dashboard_service,
    }))
}
