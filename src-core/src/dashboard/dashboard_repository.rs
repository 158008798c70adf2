use std::collections::HashMap;
use std::sync::Arc;

use diesel::dsl::{count_star, sql, sum};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double};

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::investments::{Investment, InvestmentDB};
use crate::schema::{investments, investors};

use super::dashboard_model::TopInvestor;
use super::dashboard_traits::DashboardRepositoryTrait;

/// Repository computing aggregate queries over the stored records
pub struct DashboardRepository {
    pool: Arc<DbPool>,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl DashboardRepositoryTrait for DashboardRepository {
    fn count_investors(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(investors::table.select(count_star()).first::<i64>(&mut conn)?)
    }

    fn count_investments(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(investments::table
            .select(count_star())
            .first::<i64>(&mut conn)?)
    }

    fn total_portfolio_value(&self) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total = investments::table
            .select(sum(investments::amount))
            .first::<Option<f64>>(&mut conn)?;
        Ok(total.unwrap_or(0.0))
    }

    fn investment_type_counts(&self) -> Result<HashMap<String, i64>> {
        let mut conn = get_connection(&self.pool)?;

        let type_counts: Vec<(String, i64)> = investments::table
            .group_by(investments::investment_type)
            .select((investments::investment_type, sql::<BigInt>("COUNT(*)")))
            .load::<(String, i64)>(&mut conn)?;

        Ok(type_counts.into_iter().collect())
    }

    fn recent_investments(&self, limit: i64) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;

        Ok(investments::table
            .order((investments::created_at.desc(), investments::id.desc()))
            .limit(limit)
            .load::<InvestmentDB>(&mut conn)?
            .into_iter()
            .map(Investment::from)
            .collect())
    }

    fn top_investors(&self, limit: i64) -> Result<Vec<TopInvestor>> {
        let mut conn = get_connection(&self.pool)?;

        let rows: Vec<(String, String, f64)> = investments::table
            .inner_join(investors::table)
            .group_by((investors::id, investors::name))
            .select((
                investors::id,
                investors::name,
                sql::<Double>("COALESCE(SUM(investments.amount), 0)"),
            ))
            .order((
                sql::<Double>("SUM(investments.amount)").desc(),
                investors::id.asc(),
            ))
            .limit(limit)
            .load::<(String, String, f64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(investor_id, name, total_invested)| TopInvestor {
                investor_id,
                name,
                total_invested,
            })
            .collect())
    }
}
