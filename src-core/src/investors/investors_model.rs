use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::custom_fields::custom_fields_model::{values_from_json, values_to_json};
use crate::custom_fields::CustomFieldValue;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing an investor (family member) in the system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new investor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestor {
    pub name: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
}

impl NewInvestor {
    /// Validates the new investor data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Investor name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating an existing investor. Absent fields are left
/// unchanged; an update carrying no fields at all is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorUpdate {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub custom_fields: Option<HashMap<String, CustomFieldValue>>,
}

impl InvestorUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.relationship.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.mobile.is_none()
            && self.address.is_none()
            && self.tax_id.is_none()
            && self.date_of_birth.is_none()
            && self.occupation.is_none()
            && self.photo.is_none()
            && self.custom_fields.is_none()
    }

    /// Validates the investor update data
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "No data provided for update".to_string(),
            )));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Investor name cannot be empty".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Database model for investors
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::investors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvestorDB {
    pub id: String,
    pub name: String,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub custom_fields: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied by partial updates; `None` fields are skipped
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::investors)]
pub(crate) struct InvestorChangeset {
    pub name: Option<String>,
    pub relationship: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub occupation: Option<String>,
    pub photo: Option<String>,
    pub custom_fields: Option<String>,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<InvestorDB> for Investor {
    fn from(db: InvestorDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            relationship: db.relationship,
            email: db.email,
            phone: db.phone,
            mobile: db.mobile,
            address: db.address,
            tax_id: db.tax_id,
            date_of_birth: db.date_of_birth,
            occupation: db.occupation,
            photo: db.photo,
            custom_fields: values_from_json(db.custom_fields.as_deref()),
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(db.updated_at, Utc),
        }
    }
}

impl From<NewInvestor> for InvestorDB {
    fn from(domain: NewInvestor) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: String::new(),
            name: domain.name,
            relationship: domain.relationship,
            email: domain.email,
            phone: domain.phone,
            mobile: domain.mobile,
            address: domain.address,
            tax_id: domain.tax_id,
            date_of_birth: domain.date_of_birth,
            occupation: domain.occupation,
            photo: domain.photo,
            custom_fields: values_to_json(&domain.custom_fields),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<InvestorUpdate> for InvestorChangeset {
    fn from(domain: InvestorUpdate) -> Self {
        Self {
            name: domain.name,
            relationship: domain.relationship,
            email: domain.email,
            phone: domain.phone,
            mobile: domain.mobile,
            address: domain.address,
            tax_id: domain.tax_id,
            date_of_birth: domain.date_of_birth,
            occupation: domain.occupation,
            photo: domain.photo,
            custom_fields: domain.custom_fields.as_ref().map(values_to_json_or_empty),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

fn values_to_json_or_empty(values: &HashMap<String, CustomFieldValue>) -> String {
    values_to_json(values).unwrap_or_else(|| "{}".to_string())
}
