use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::constants::LIST_QUERY_CAP;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::investors::InvestorError;
use crate::schema::investors;
use crate::schema::investors::dsl::*;

use super::investors_model::{Investor, InvestorChangeset, InvestorDB, InvestorUpdate, NewInvestor};
use super::investors_traits::InvestorRepositoryTrait;

/// Repository for managing investor data in the database
pub struct InvestorRepository {
    pool: Arc<DbPool>,
}

impl InvestorRepository {
    /// Creates a new InvestorRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl InvestorRepositoryTrait for InvestorRepository {
    fn create(&self, new_investor: NewInvestor) -> Result<Investor> {
        new_investor.validate()?;

        let mut investor_db: InvestorDB = new_investor.into();
        investor_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(investors::table)
            .values(&investor_db)
            .execute(&mut conn)?;

        Ok(investor_db.into())
    }

    fn update(&self, investor_id: &str, update: InvestorUpdate) -> Result<Investor> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let changes: InvestorChangeset = update.into();
        let affected = diesel::update(investors.find(investor_id))
            .set(&changes)
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::Investor(InvestorError::NotFound(format!(
                "Investor with id {} not found",
                investor_id
            ))));
        }

        let updated = investors
            .find(investor_id)
            .first::<InvestorDB>(&mut conn)?;

        Ok(updated.into())
    }

    fn get_by_id(&self, investor_id: &str) -> Result<Investor> {
        let mut conn = get_connection(&self.pool)?;

        let investor = investors
            .find(investor_id)
            .first::<InvestorDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::Investor(InvestorError::NotFound(
                    format!("Investor with id {} not found", investor_id),
                )),
                _ => Error::from(e),
            })?;

        Ok(investor.into())
    }

    fn list(&self) -> Result<Vec<Investor>> {
        let mut conn = get_connection(&self.pool)?;

        investors::table
            .order(name.asc())
            .limit(LIST_QUERY_CAP)
            .load::<InvestorDB>(&mut conn)
            .map_err(Error::from)
            .map(|results| results.into_iter().map(Investor::from).collect())
    }

    fn delete_in_transaction(
        &self,
        investor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize> {
        Ok(diesel::delete(investors.find(investor_id)).execute(conn)?)
    }
}
