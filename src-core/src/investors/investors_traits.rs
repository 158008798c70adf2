use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::investors_model::{Investor, InvestorUpdate, NewInvestor};
use crate::errors::Result;

/// Trait defining the contract for Investor repository operations.
pub trait InvestorRepositoryTrait: Send + Sync {
    fn create(&self, new_investor: NewInvestor) -> Result<Investor>;
    fn update(&self, investor_id: &str, update: InvestorUpdate) -> Result<Investor>;
    fn get_by_id(&self, investor_id: &str) -> Result<Investor>;
    fn list(&self) -> Result<Vec<Investor>>;
    fn delete_in_transaction(
        &self,
        investor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<usize>;
}

/// Trait defining the contract for Investor service operations.
#[async_trait]
pub trait InvestorServiceTrait: Send + Sync {
    async fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor>;
    async fn update_investor(&self, investor_id: &str, update: InvestorUpdate)
        -> Result<Investor>;
    /// Deletes the investor and returns the deleted record. Fails with a
    /// constraint violation when investments still reference it.
    async fn delete_investor(&self, investor_id: &str) -> Result<Investor>;
    fn get_investor(&self, investor_id: &str) -> Result<Investor>;
    fn get_all_investors(&self) -> Result<Vec<Investor>>;
}
