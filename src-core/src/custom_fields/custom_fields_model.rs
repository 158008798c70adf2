use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Entity kind a custom field is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Investor,
    Investment,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Investor => "investor",
            EntityType::Investment => "investment",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "investor" => Ok(EntityType::Investor),
            "investment" => Ok(EntityType::Investment),
            _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown entity type: {}",
                s
            )))),
        }
    }
}

/// Declared value type of a custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Email,
    Phone,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "email" => Ok(FieldType::Email),
            "phone" => Ok(FieldType::Phone),
            _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown field type: {}",
                s
            )))),
        }
    }
}

/// A single custom-field value carried on an investor or investment record.
///
/// Numbers must come in as JSON numbers; everything else is text and is
/// checked against the declared field type on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    Number(f64),
    Text(String),
}

/// Domain model describing a dynamically declared extra attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldConfig {
    pub id: String,
    pub entity_type: EntityType,
    pub field_name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub options: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

/// Input model for declaring a new custom field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomFieldConfig {
    pub entity_type: EntityType,
    pub field_name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    pub options: Option<Vec<String>>,
}

impl NewCustomFieldConfig {
    /// Validates the new custom-field declaration
    pub fn validate(&self) -> Result<()> {
        if self.field_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Field name cannot be empty".to_string(),
            )));
        }
        if let Some(options) = &self.options {
            if options.is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Options list cannot be empty".to_string(),
                )));
            }
            for option in options {
                if !option_matches_type(self.field_type, option) {
                    return Err(Error::Validation(ValidationError::InvalidInput(format!(
                        "Option '{}' is not a valid {} value",
                        option, self.field_type
                    ))));
                }
            }
        }
        Ok(())
    }
}

/// Database model for custom field configs
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::custom_field_configs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomFieldConfigDB {
    pub id: String,
    pub entity_type: String,
    pub field_name: String,
    pub field_type: String,
    pub is_required: bool,
    pub options: Option<String>,
    pub created_at: NaiveDateTime,
}

// Conversion implementations
impl TryFrom<CustomFieldConfigDB> for CustomFieldConfig {
    type Error = Error;

    fn try_from(db: CustomFieldConfigDB) -> Result<Self> {
        let options = match db.options {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        Ok(Self {
            id: db.id,
            entity_type: db.entity_type.parse()?,
            field_name: db.field_name,
            field_type: db.field_type.parse()?,
            required: db.is_required,
            options,
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
        })
    }
}

impl From<NewCustomFieldConfig> for CustomFieldConfigDB {
    fn from(domain: NewCustomFieldConfig) -> Self {
        Self {
            id: String::new(),
            entity_type: domain.entity_type.as_str().to_string(),
            field_name: domain.field_name,
            field_type: domain.field_type.as_str().to_string(),
            is_required: domain.required,
            options: domain
                .options
                .as_ref()
                .and_then(|opts| serde_json::to_string(opts).ok()),
            created_at: Utc::now().naive_utc(),
        }
    }
}

/// Validates supplied custom-field values against the declared configs for
/// the entity type. Required fields must be present, undeclared names are
/// rejected, values must match the declared type, and values for a config
/// with an options list must be one of the options.
pub fn validate_values(
    values: &HashMap<String, CustomFieldValue>,
    configs: &[CustomFieldConfig],
) -> Result<()> {
    for config in configs {
        if config.required && !values.contains_key(&config.field_name) {
            return Err(Error::Validation(ValidationError::MissingField(
                config.field_name.clone(),
            )));
        }
    }

    for (name, value) in values {
        let config = configs
            .iter()
            .find(|c| &c.field_name == name)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Custom field '{}' is not declared",
                    name
                )))
            })?;

        if let Err(reason) = value_matches_type(config.field_type, value) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Custom field '{}' {}",
                name, reason
            ))));
        }

        if let Some(options) = &config.options {
            let allowed = match value {
                CustomFieldValue::Text(s) => options.iter().any(|o| o == s),
                CustomFieldValue::Number(n) => {
                    options.iter().any(|o| o.parse::<f64>() == Ok(*n))
                }
            };
            if !allowed {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Custom field '{}' must be one of the declared options",
                    name
                ))));
            }
        }
    }

    Ok(())
}

fn value_matches_type(
    field_type: FieldType,
    value: &CustomFieldValue,
) -> std::result::Result<(), &'static str> {
    match (field_type, value) {
        (FieldType::Number, CustomFieldValue::Number(n)) => {
            if n.is_finite() {
                Ok(())
            } else {
                Err("must be a finite number")
            }
        }
        (FieldType::Number, _) => Err("must be a number"),
        (FieldType::Text, CustomFieldValue::Text(_)) => Ok(()),
        (FieldType::Date, CustomFieldValue::Text(s)) => {
            if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err("must be a YYYY-MM-DD date")
            }
        }
        (FieldType::Email, CustomFieldValue::Text(s)) => {
            if is_email(s) {
                Ok(())
            } else {
                Err("must be a valid email address")
            }
        }
        (FieldType::Phone, CustomFieldValue::Text(s)) => {
            if is_phone(s) {
                Ok(())
            } else {
                Err("must be a valid phone number")
            }
        }
        (FieldType::Text, _) => Err("must be text"),
        (FieldType::Date, _) => Err("must be a YYYY-MM-DD date"),
        (FieldType::Email, _) => Err("must be a valid email address"),
        (FieldType::Phone, _) => Err("must be a valid phone number"),
    }
}

fn option_matches_type(field_type: FieldType, option: &str) -> bool {
    match field_type {
        FieldType::Text => !option.trim().is_empty(),
        FieldType::Number => option.parse::<f64>().is_ok(),
        FieldType::Date => NaiveDate::parse_from_str(option, "%Y-%m-%d").is_ok(),
        FieldType::Email => is_email(option),
        FieldType::Phone => is_phone(option),
    }
}

fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !s.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_phone(s: &str) -> bool {
    let digits = s.chars().filter(char::is_ascii_digit).count();
    digits >= 6 && s.chars().all(|c| c.is_ascii_digit() || "+-() ".contains(c))
}

/// Parses the JSON text column holding custom-field values. Unreadable
/// content degrades to an empty map rather than failing the read.
pub(crate) fn values_from_json(raw: Option<&str>) -> HashMap<String, CustomFieldValue> {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// Serializes custom-field values for the JSON text column. An empty map is
/// stored as NULL.
pub(crate) fn values_to_json(values: &HashMap<String, CustomFieldValue>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        serde_json::to_string(values).ok()
    }
}
