use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::custom_fields::{validate_values, CustomFieldRepositoryTrait, EntityType};
use crate::errors::Result;
use crate::investors::InvestorRepositoryTrait;

/// Service for managing investments
pub struct InvestmentService {
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    investor_repository: Arc<dyn InvestorRepositoryTrait>,
    custom_field_repository: Arc<dyn CustomFieldRepositoryTrait>,
}

impl InvestmentService {
    /// Creates a new InvestmentService instance
    pub fn new(
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        investor_repository: Arc<dyn InvestorRepositoryTrait>,
        custom_field_repository: Arc<dyn CustomFieldRepositoryTrait>,
    ) -> Self {
        Self {
            investment_repository,
            investor_repository,
            custom_field_repository,
        }
    }

    fn validate_custom_fields(&self, new_investment: &NewInvestment) -> Result<()> {
        let configs = self
            .custom_field_repository
            .list_by_entity_type(EntityType::Investment)?;
        validate_values(&new_investment.custom_fields, &configs)
    }
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        new_investment.validate()?;

        // The owning investor must exist before anything is persisted
        let investor = self
            .investor_repository
            .get_by_id(&new_investment.investor_id)?;

        self.validate_custom_fields(&new_investment)?;

        let created = self.investment_repository.create(new_investment)?;
        debug!(
            "Created investment {} for investor {}",
            created.id, investor.id
        );
        Ok(created)
    }

    async fn update_investment(
        &self,
        investment_id: &str,
        update: InvestmentUpdate,
    ) -> Result<Investment> {
        update.validate()?;

        // Full replace re-validates the owning investor
        self.investor_repository.get_by_id(&update.investor_id)?;

        let configs = self
            .custom_field_repository
            .list_by_entity_type(EntityType::Investment)?;
        validate_values(&update.custom_fields, &configs)?;

        self.investment_repository.update(investment_id, update)
    }

    async fn delete_investment(&self, investment_id: &str) -> Result<()> {
        self.investment_repository.delete(investment_id)?;
        Ok(())
    }

    fn get_investment(&self, investment_id: &str) -> Result<Investment> {
        self.investment_repository.get_by_id(investment_id)
    }

    fn list_investments(&self, investor_filter: Option<&str>) -> Result<Vec<Investment>> {
        self.investment_repository.list(investor_filter)
    }
}
