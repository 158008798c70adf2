use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::investors_model::{Investor, InvestorUpdate, NewInvestor};
use super::investors_traits::{InvestorRepositoryTrait, InvestorServiceTrait};
use crate::custom_fields::{validate_values, CustomFieldRepositoryTrait, EntityType};
use crate::db::{DbPool, DbTransactionExecutor};
use crate::errors::{Error, Result};
use crate::investments::InvestmentRepositoryTrait;
use crate::investors::InvestorError;

/// Service for managing investors
pub struct InvestorService {
    investor_repository: Arc<dyn InvestorRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    custom_field_repository: Arc<dyn CustomFieldRepositoryTrait>,
    transaction_executor: Arc<DbPool>,
}

impl InvestorService {
    /// Creates a new InvestorService instance
    pub fn new(
        investor_repository: Arc<dyn InvestorRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        custom_field_repository: Arc<dyn CustomFieldRepositoryTrait>,
        transaction_executor: Arc<DbPool>,
    ) -> Self {
        Self {
            investor_repository,
            investment_repository,
            custom_field_repository,
            transaction_executor,
        }
    }
}

#[async_trait]
impl InvestorServiceTrait for InvestorService {
    async fn create_investor(&self, new_investor: NewInvestor) -> Result<Investor> {
        new_investor.validate()?;

        let configs = self
            .custom_field_repository
            .list_by_entity_type(EntityType::Investor)?;
        validate_values(&new_investor.custom_fields, &configs)?;

        self.investor_repository.create(new_investor)
    }

    async fn update_investor(
        &self,
        investor_id: &str,
        update: InvestorUpdate,
    ) -> Result<Investor> {
        update.validate()?;

        if let Some(custom_fields) = &update.custom_fields {
            let configs = self
                .custom_field_repository
                .list_by_entity_type(EntityType::Investor)?;
            validate_values(custom_fields, &configs)?;
        }

        self.investor_repository.update(investor_id, update)
    }

    async fn delete_investor(&self, investor_id: &str) -> Result<Investor> {
        let investor = self.investor_repository.get_by_id(investor_id)?;

        // Dependency check and delete run in one transaction so a concurrent
        // investment insert cannot slip between them.
        self.transaction_executor.execute(|conn| {
            let dependents = self
                .investment_repository
                .count_for_investor_in_transaction(investor_id, conn)?;

            if dependents > 0 {
                return Err(Error::Investor(InvestorError::HasInvestments(format!(
                    "Investor {} has {} linked investment(s) and cannot be deleted",
                    investor_id, dependents
                ))));
            }

            let affected = self
                .investor_repository
                .delete_in_transaction(investor_id, conn)?;

            if affected == 0 {
                return Err(Error::Investor(InvestorError::DatabaseError(format!(
                    "Failed to delete investor {}",
                    investor_id
                ))));
            }

            Ok(())
        })?;

        debug!("Deleted investor {}", investor.id);
        Ok(investor)
    }

    fn get_investor(&self, investor_id: &str) -> Result<Investor> {
        self.investor_repository.get_by_id(investor_id)
    }

    fn get_all_investors(&self) -> Result<Vec<Investor>> {
        self.investor_repository.list()
    }
}
