use async_trait::async_trait;

use super::custom_fields_model::{CustomFieldConfig, EntityType, NewCustomFieldConfig};
use crate::errors::Result;

/// Trait defining the contract for custom-field repository operations.
pub trait CustomFieldRepositoryTrait: Send + Sync {
    fn create(&self, new_config: NewCustomFieldConfig) -> Result<CustomFieldConfig>;
    fn list_by_entity_type(&self, entity_type: EntityType) -> Result<Vec<CustomFieldConfig>>;
    fn delete(&self, config_id: &str) -> Result<usize>;
}

/// Trait defining the contract for custom-field service operations.
#[async_trait]
pub trait CustomFieldServiceTrait: Send + Sync {
    async fn create_custom_field(
        &self,
        new_config: NewCustomFieldConfig,
    ) -> Result<CustomFieldConfig>;
    fn get_custom_fields(&self, entity_type: EntityType) -> Result<Vec<CustomFieldConfig>>;
    async fn delete_custom_field(&self, config_id: &str) -> Result<()>;
}
