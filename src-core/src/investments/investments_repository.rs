use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::constants::LIST_QUERY_CAP;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::investments::InvestmentError;
use crate::schema::investments;
use crate::schema::investments::dsl::*;

use super::investments_model::{Investment, InvestmentDB, InvestmentUpdate, NewInvestment};
use super::investments_traits::InvestmentRepositoryTrait;

/// Repository for managing investment data in the database
pub struct InvestmentRepository {
    pool: Arc<DbPool>,
}

impl InvestmentRepository {
    /// Creates a new InvestmentRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl InvestmentRepositoryTrait for InvestmentRepository {
    fn create(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;

        let mut investment_db: InvestmentDB = new_investment.into();
        investment_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(investments::table)
            .values(&investment_db)
            .execute(&mut conn)?;

        Ok(investment_db.into())
    }

    fn update(&self, investment_id: &str, update: InvestmentUpdate) -> Result<Investment> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let existing = investments
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::Investment(InvestmentError::NotFound(
                    format!("Investment with id {} not found", investment_id),
                )),
                _ => Error::from(e),
            })?;

        let investment_db = update.into_db(&existing);

        diesel::update(investments.find(investment_id))
            .set(&investment_db)
            .execute(&mut conn)?;

        Ok(investment_db.into())
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;

        let investment = investments
            .find(investment_id)
            .first::<InvestmentDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::Investment(InvestmentError::NotFound(
                    format!("Investment with id {} not found", investment_id),
                )),
                _ => Error::from(e),
            })?;

        Ok(investment.into())
    }

    fn list(&self, investor_filter: Option<&str>) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = investments::table.into_boxed();

        if let Some(owner) = investor_filter {
            query = query.filter(investor_id.eq(owner.to_string()));
        }

        query
            .order((created_at.desc(), id.desc()))
            .limit(LIST_QUERY_CAP)
            .load::<InvestmentDB>(&mut conn)
            .map_err(Error::from)
            .map(|results| results.into_iter().map(Investment::from).collect())
    }

    fn delete(&self, investment_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(investments.find(investment_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::Investment(InvestmentError::NotFound(format!(
                "Investment with id {} not found",
                investment_id
            ))));
        }

        Ok(affected)
    }

    fn count_for_investor(&self, owner: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        self.count_for_investor_in_transaction(owner, &mut conn)
    }

    fn count_for_investor_in_transaction(
        &self,
        owner: &str,
        conn: &mut SqliteConnection,
    ) -> Result<i64> {
        use diesel::dsl::count_star;

        Ok(investments::table
            .filter(investor_id.eq(owner))
            .select(count_star())
            .first::<i64>(conn)?)
    }
}
