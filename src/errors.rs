use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::models::reservation::{AdmissionRejection, RejectionReason};

const GENERIC_MESSAGE: &str = "Something went wrong, please try again";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No tee times to generate: {0}")]
    EmptySchedule(String),

    #[error("No active season")]
    NoActiveSeason,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<i32>,
}

impl ErrorBody {
    fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
            reason: None,
            available_slots: None,
        }
    }

    pub fn rejected(rejection: &AdmissionRejection) -> Self {
        Self {
            error: "rejected",
            message: rejection.to_string(),
            reason: Some(rejection.reason),
            available_slots: Some(rejection.available_slots),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

impl AppError {
    pub fn to_response(&self) -> ApiError {
        let (status, body) = match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("validation", msg.clone()))
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorBody::new("not_found", msg.clone()))
            }
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorBody::new("unauthorized", msg.clone()))
            }
            AppError::JwtError(_) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("unauthorized", "Invalid or expired token"),
            ),
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, ErrorBody::new("forbidden", msg.clone()))
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorBody::new("conflict", msg.clone()))
            }
            AppError::EmptySchedule(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody::new("empty_schedule", msg.clone()),
            ),
            AppError::NoActiveSeason => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("no_active_season", "No season is currently active"),
            ),
            AppError::DatabaseError(_) | AppError::EnvError(_) | AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("upstream", GENERIC_MESSAGE),
            ),
        };

        (status, Json(body))
    }
}

pub fn rejection_response(rejection: &AdmissionRejection) -> ApiError {
    (StatusCode::CONFLICT, Json(ErrorBody::rejected(rejection)))
}
