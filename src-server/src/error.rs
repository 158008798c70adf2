use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use investfolio_core::custom_fields::CustomFieldError;
use investfolio_core::errors::Error as CoreError;
use investfolio_core::investments::InvestmentError;
use investfolio_core::investors::InvestorError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    // Surface the underlying error message to help debugging during development
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => (core_status(e), e.to_string()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Investor(InvestorError::NotFound(_))
        | CoreError::Investment(InvestmentError::NotFound(_))
        | CoreError::CustomField(CustomFieldError::NotFound(_)) => StatusCode::NOT_FOUND,
        // Delete blocked by referential integrity surfaces as a client error
        CoreError::Investor(InvestorError::HasInvestments(_)) => StatusCode::BAD_REQUEST,
        CoreError::Investor(InvestorError::InvalidData(_))
        | CoreError::Investment(InvestmentError::InvalidData(_))
        | CoreError::CustomField(CustomFieldError::InvalidData(_)) => StatusCode::BAD_REQUEST,
        CoreError::Investor(InvestorError::DatabaseError(_))
        | CoreError::Investment(InvestmentError::DatabaseError(_))
        | CoreError::CustomField(CustomFieldError::DatabaseError(_))
        | CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
