// Module declarations
pub(crate) mod custom_fields_errors;
pub(crate) mod custom_fields_model;
pub(crate) mod custom_fields_repository;
pub(crate) mod custom_fields_service;
pub(crate) mod custom_fields_traits;


// Re-export the public interface
pub use custom_fields_errors::CustomFieldError;
pub use custom_fields_model::{
    validate_values, CustomFieldConfig, CustomFieldConfigDB, CustomFieldValue, EntityType,
    FieldType, NewCustomFieldConfig,
};
pub use custom_fields_repository::CustomFieldRepository;
pub use custom_fields_service::CustomFieldService;
pub use custom_fields_traits::{CustomFieldRepositoryTrait, CustomFieldServiceTrait};
