use log::debug;
use std::sync::Arc;

use super::dashboard_model::DashboardStats;
use super::dashboard_traits::{DashboardRepositoryTrait, DashboardServiceTrait};
use crate::constants::{RECENT_INVESTMENTS_LIMIT, TOP_INVESTORS_LIMIT};
use crate::errors::Result;

/// Service assembling the dashboard summary
pub struct DashboardService {
    repository: Arc<dyn DashboardRepositoryTrait>,
}

impl DashboardService {
    /// Creates a new DashboardService instance
    pub fn new(repository: Arc<dyn DashboardRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        debug!("Computing dashboard stats");

        let total_investors = self.repository.count_investors()?;
        let total_investments = self.repository.count_investments()?;
        let total_portfolio_value = self.repository.total_portfolio_value()?;
        let investment_types_count = self.repository.investment_type_counts()?;
        let recent_investments = self.repository.recent_investments(RECENT_INVESTMENTS_LIMIT)?;
        let top_investors = self.repository.top_investors(TOP_INVESTORS_LIMIT)?;

        Ok(DashboardStats {
            total_investors,
            total_investments,
            total_portfolio_value,
            investment_types_count,
            recent_investments,
            top_investors,
        })
    }
}
