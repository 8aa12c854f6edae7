use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use strum::Display as StrumDisplay;
use tracing::error;

use crate::store::StoreError;

/// Message shown to clients for any unexpected failure.
pub const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, Copy, Clone, Eq, PartialEq, StrumDisplay)]
pub enum Resource {
    Employee,
    Department,
    #[strum(serialize = "Attendance record")]
    Attendance,
}

#[derive(Debug, Display, PartialEq)]
pub enum AppError {
    #[display(fmt = "{}", _0)]
    Validation(String),
    #[display(fmt = "{} not found", _0)]
    NotFound(Resource),
    #[display(fmt = "{}", _0)]
    Conflict(String),
    #[display(fmt = "{}", _0)]
    Internal(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Text placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Internal(_) => GENERIC_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(cause) = self {
            error!(error = %cause, "Request failed");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "error": self.client_message()
        }))
    }
}
