use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use crate::errors::Result;

/// Trait defining the contract for Investment repository operations.
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn create(&self, new_investment: NewInvestment) -> Result<Investment>;
    fn update(&self, investment_id: &str, update: InvestmentUpdate) -> Result<Investment>;
    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;
    fn list(&self, investor_filter: Option<&str>) -> Result<Vec<Investment>>;
    fn delete(&self, investment_id: &str) -> Result<usize>;
    fn count_for_investor(&self, investor_id: &str) -> Result<i64>;
    fn count_for_investor_in_transaction(
        &self,
        investor_id: &str,
        conn: &mut SqliteConnection,
    ) -> Result<i64>;
}

/// Trait defining the contract for Investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    async fn update_investment(
        &self,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment>;
    async fn delete_investment(&self, investment_id: &str) -> Result<()>;
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;
    fn list_investments(&self, investor_filter: Option<&str>) -> Result<Vec<Investment>>;
}
