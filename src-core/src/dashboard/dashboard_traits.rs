use std::collections::HashMap;

use super::dashboard_model::{DashboardStats, TopInvestor};
use crate::errors::Result;
use crate::investments::Investment;

/// Trait defining the contract for dashboard aggregation queries.
pub trait DashboardRepositoryTrait: Send + Sync {
    fn count_investors(&self) -> Result<i64>;
    fn count_investments(&self) -> Result<i64>;
    fn total_portfolio_value(&self) -> Result<f64>;
    fn investment_type_counts(&self) -> Result<HashMap<String, i64>>;
    fn recent_investments(&self, limit: i64) -> Result<Vec<Investment>>;
    fn top_investors(&self, limit: i64) -> Result<Vec<TopInvestor>>;
}

/// Trait defining the contract for dashboard service operations.
pub trait DashboardServiceTrait: Send + Sync {
    fn get_dashboard_stats(&self) -> Result<DashboardStats>;
}
