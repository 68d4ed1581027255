// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to an HTTP status code and a `{"error": {label: message}}` body
#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Sorry a cafe with that id was not found in the database.")]
    NotFound(i64),

    #[error("Sorry, we don't have a cafe at the that location.")]
    NoCafesAtLocation(String),

    #[error("Sorry, there are no cafes in the database.")]
    EmptyCollection,

    #[error("Sorry, that's not allowed. Make sure you have the correct api_key.")]
    Forbidden,

    #[error("A cafe with that name already exists: {0}")]
    AlreadyExists(String),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database temporarily unavailable: {0}")]
    StoreUnavailable(String),
}

impl CafeError {
    /// Key of the inner error object
    pub fn label(&self) -> &'static str {
        match self {
            CafeError::NotFound(_) | CafeError::EmptyCollection => "Not Found",
            CafeError::NoCafesAtLocation(_) => "Error",
            CafeError::Forbidden => "Forbidden",
            CafeError::AlreadyExists(_) => "Conflict",
            CafeError::BadRequest(_) => "Bad Request",
            CafeError::DatabaseError(_) => "Database Error",
            CafeError::StoreUnavailable(_) => "Service Unavailable",
        }
    }
}

/// Classify store failures
/// DOCUMENTATION: Connectivity problems become 503, constraint violations
/// on the unique name become 409, everything else is a 500
impl From<sqlx::Error> for CafeError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                log::error!("Database unavailable: {}", e);
                CafeError::StoreUnavailable(e.to_string())
            }
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                log::warn!("Unique constraint violated: {}", db.message());
                CafeError::AlreadyExists(db.message().to_string())
            }
            _ => {
                log::error!("Database error: {}", e);
                CafeError::DatabaseError(e.to_string())
            }
        }
    }
}

/// Convert CafeError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for CafeError {
    fn error_response(&self) -> HttpResponse {
        match self {
            CafeError::NotFound(id) => log::debug!("Responding 404 for cafe id {}", id),
            CafeError::NoCafesAtLocation(loc) => {
                log::debug!("Responding 404 for location {:?}", loc)
            }
            _ => {}
        }

        let mut detail = serde_json::Map::new();
        detail.insert(self.label().to_string(), json!(self.to_string()));
        let body = json!({ "error": detail });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CafeError::NotFound(_) => StatusCode::NOT_FOUND,
            CafeError::NoCafesAtLocation(_) => StatusCode::NOT_FOUND,
            CafeError::EmptyCollection => StatusCode::NOT_FOUND,
            CafeError::Forbidden => StatusCode::FORBIDDEN,
            CafeError::AlreadyExists(_) => StatusCode::CONFLICT,
            CafeError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CafeError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CafeError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
