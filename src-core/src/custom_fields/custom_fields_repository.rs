use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;

use crate::custom_fields::CustomFieldError;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::custom_field_configs;
use crate::schema::custom_field_configs::dsl::*;

use super::custom_fields_model::{
    CustomFieldConfig, CustomFieldConfigDB, EntityType, NewCustomFieldConfig,
};
use super::custom_fields_traits::CustomFieldRepositoryTrait;

/// Repository for managing custom-field declarations in the database
pub struct CustomFieldRepository {
    pool: Arc<DbPool>,
}

impl CustomFieldRepository {
    /// Creates a new CustomFieldRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CustomFieldRepositoryTrait for CustomFieldRepository {
    fn create(&self, new_config: NewCustomFieldConfig) -> Result<CustomFieldConfig> {
        new_config.validate()?;

        let mut config_db: CustomFieldConfigDB = new_config.into();
        config_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(custom_field_configs::table)
            .values(&config_db)
            .execute(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    Error::CustomField(CustomFieldError::InvalidData(format!(
                        "Custom field '{}' is already declared for {}",
                        config_db.field_name, config_db.entity_type
                    )))
                }
                other => Error::from(other),
            })?;

        config_db.try_into()
    }

    fn list_by_entity_type(&self, entity_type_filter: EntityType) -> Result<Vec<CustomFieldConfig>> {
        let mut conn = get_connection(&self.pool)?;

        custom_field_configs::table
            .filter(entity_type.eq(entity_type_filter.as_str()))
            .order(field_name.asc())
            .load::<CustomFieldConfigDB>(&mut conn)?
            .into_iter()
            .map(CustomFieldConfig::try_from)
            .collect()
    }

    fn delete(&self, config_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected =
            diesel::delete(custom_field_configs.find(config_id)).execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::CustomField(CustomFieldError::NotFound(format!(
                "Custom field with id {} not found",
                config_id
            ))));
        }

        Ok(affected)
    }
}
