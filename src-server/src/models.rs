use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use investfolio_core::custom_fields::CustomFieldValue;
use investfolio_core::investors as core_investors;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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
    #[schema(value_type = Object)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<core_investors::Investor> for Investor {
    fn from(i: core_investors::Investor) -> Self {
        Self {
            id: i.id,
            name: i.name,
            relationship: i.relationship,
            email: i.email,
            phone: i.phone,
            mobile: i.mobile,
            address: i.address,
            tax_id: i.tax_id,
            date_of_birth: i.date_of_birth,
            occupation: i.occupation,
            photo: i.photo,
            custom_fields: i.custom_fields,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
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
    #[schema(value_type = Object)]
    pub custom_fields: HashMap<String, CustomFieldValue>,
}

impl From<NewInvestor> for core_investors::NewInvestor {
    fn from(i: NewInvestor) -> Self {
        Self {
            name: i.name,
            relationship: i.relationship,
            email: i.email,
            phone: i.phone,
            mobile: i.mobile,
            address: i.address,
            tax_id: i.tax_id,
            date_of_birth: i.date_of_birth,
            occupation: i.occupation,
            photo: i.photo,
            custom_fields: i.custom_fields,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
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
    #[schema(value_type = Object)]
    pub custom_fields: Option<HashMap<String, CustomFieldValue>>,
}

impl From<InvestorUpdate> for core_investors::InvestorUpdate {
    fn from(i: InvestorUpdate) -> Self {
        Self {
            name: i.name,
            relationship: i.relationship,
            email: i.email,
            phone: i.phone,
            mobile: i.mobile,
            address: i.address,
            tax_id: i.tax_id,
            date_of_birth: i.date_of_birth,
            occupation: i.occupation,
            photo: i.photo,
            custom_fields: i.custom_fields,
        }
    }
}

/// Response body for successful delete operations
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}
