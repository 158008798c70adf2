use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::custom_fields_model::{CustomFieldConfig, EntityType, NewCustomFieldConfig};
use super::custom_fields_traits::{CustomFieldRepositoryTrait, CustomFieldServiceTrait};
use crate::errors::Result;

/// Service for managing custom-field declarations
pub struct CustomFieldService {
    repository: Arc<dyn CustomFieldRepositoryTrait>,
}

impl CustomFieldService {
    /// Creates a new CustomFieldService instance
    pub fn new(repository: Arc<dyn CustomFieldRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomFieldServiceTrait for CustomFieldService {
    async fn create_custom_field(
        &self,
        new_config: NewCustomFieldConfig,
    ) -> Result<CustomFieldConfig> {
        debug!(
            "Declaring custom field '{}' for {}",
            new_config.field_name, new_config.entity_type
        );
        self.repository.create(new_config)
    }

    fn get_custom_fields(&self, entity_type: EntityType) -> Result<Vec<CustomFieldConfig>> {
        self.repository.list_by_entity_type(entity_type)
    }

    async fn delete_custom_field(&self, config_id: &str) -> Result<()> {
        self.repository.delete(config_id)?;
        Ok(())
    }
}
