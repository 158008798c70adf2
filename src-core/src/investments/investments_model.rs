use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::custom_fields::custom_fields_model::{values_from_json, values_to_json};
use crate::custom_fields::CustomFieldValue;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a single financial holding owned by an investor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub investor_id: String,
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub purchase_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    pub interest_day: Option<i32>,
    pub interest_month: Option<i32>,
    pub maturity_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new investment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub investor_id: String,
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub purchase_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    pub interest_day: Option<i32>,
    pub interest_month: Option<i32>,
    pub maturity_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
}

impl NewInvestment {
    /// Validates the new investment data
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.investor_id,
            &self.name,
            &self.investment_type,
            self.amount,
            self.interest_rate,
            self.interest_day,
            self.interest_month,
        )
    }
}

/// Input model for replacing an existing investment. All editable fields are
/// resupplied; the owning investor is re-validated on every update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentUpdate {
    pub investor_id: String,
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub purchase_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    pub interest_day: Option<i32>,
    pub interest_month: Option<i32>,
    pub maturity_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
}

impl InvestmentUpdate {
    /// Validates the investment update data
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.investor_id,
            &self.name,
            &self.investment_type,
            self.amount,
            self.interest_rate,
            self.interest_day,
            self.interest_month,
        )
    }
}

fn validate_fields(
    investor_id: &str,
    name: &str,
    investment_type: &str,
    amount: f64,
    interest_rate: Option<f64>,
    interest_day: Option<i32>,
    interest_month: Option<i32>,
) -> Result<()> {
    if investor_id.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Investor ID cannot be empty".to_string(),
        )));
    }
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Investment name cannot be empty".to_string(),
        )));
    }
    if investment_type.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Investment type cannot be empty".to_string(),
        )));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount must be a non-negative number".to_string(),
        )));
    }
    if let Some(rate) = interest_rate {
        if !rate.is_finite() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Interest rate must be a finite number".to_string(),
            )));
        }
    }
    if let Some(day) = interest_day {
        if !(1..=31).contains(&day) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Interest day must be between 1 and 31".to_string(),
            )));
        }
    }
    if let Some(month) = interest_month {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Interest month must be between 1 and 12".to_string(),
            )));
        }
    }
    Ok(())
}

/// Database model for investments
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
#[diesel(table_name = crate::schema::investments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct InvestmentDB {
    pub id: String,
    pub investor_id: String,
    pub name: String,
    pub investment_type: String,
    pub amount: f64,
    pub purchase_date: Option<NaiveDate>,
    pub interest_rate: Option<f64>,
    pub interest_day: Option<i32>,
    pub interest_month: Option<i32>,
    pub maturity_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub issuer: Option<String>,
    pub photo: Option<String>,
    pub custom_fields: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<InvestmentDB> for Investment {
    fn from(db: InvestmentDB) -> Self {
        Self {
            id: db.id,
            investor_id: db.investor_id,
            name: db.name,
            investment_type: db.investment_type,
            amount: db.amount,
            purchase_date: db.purchase_date,
            interest_rate: db.interest_rate,
            interest_day: db.interest_day,
            interest_month: db.interest_month,
            maturity_date: db.maturity_date,
            description: db.description,
            issuer: db.issuer,
            photo: db.photo,
            custom_fields: values_from_json(db.custom_fields.as_deref()),
            created_at: DateTime::from_naive_utc_and_offset(db.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(db.updated_at, Utc),
        }
    }
}

impl From<NewInvestment> for InvestmentDB {
    fn from(domain: NewInvestment) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: String::new(),
            investor_id: domain.investor_id,
            name: domain.name,
            investment_type: domain.investment_type,
            amount: domain.amount,
            purchase_date: domain.purchase_date,
            interest_rate: domain.interest_rate,
            interest_day: domain.interest_day,
            interest_month: domain.interest_month,
            maturity_date: domain.maturity_date,
            description: domain.description,
            issuer: domain.issuer,
            photo: domain.photo,
            custom_fields: values_to_json(&domain.custom_fields),
            created_at: now,
            updated_at: now,
        }
    }
}

impl InvestmentUpdate {
    /// Builds the replacement row, carrying the identity and creation time of
    /// the existing record.
    pub(crate) fn into_db(self, existing: &InvestmentDB) -> InvestmentDB {
        InvestmentDB {
            id: existing.id.clone(),
            investor_id: self.investor_id,
            name: self.name,
            investment_type: self.investment_type,
            amount: self.amount,
            purchase_date: self.purchase_date,
            interest_rate: self.interest_rate,
            interest_day: self.interest_day,
            interest_month: self.interest_month,
            maturity_date: self.maturity_date,
            description: self.description,
            issuer: self.issuer,
            photo: self.photo,
            custom_fields: values_to_json(&self.custom_fields),
            created_at: existing.created_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
