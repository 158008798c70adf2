use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::investments::Investment;

/// On-demand aggregate summary computed over stored records, not persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_investors: i64,
    pub total_investments: i64,
    /// Floating-point accumulation; exact decimal precision is not guaranteed.
    pub total_portfolio_value: f64,
    pub investment_types_count: HashMap<String, i64>,
    pub recent_investments: Vec<Investment>,
    pub top_investors: Vec<TopInvestor>,
}

/// An investor ranked by total invested amount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopInvestor {
    pub investor_id: String,
    pub name: String,
    pub total_invested: f64,
}
