//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Repository errors are wrapped once with operation context through
//! [`DbResultExt::db_context`]. Failures of a nested service call are wrapped with
//! [`AppError::service`], which keeps the original error reachable via [`AppError::root`]
//! so business rule sentinels stay matchable.

pub mod auth;
pub mod booking;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, internal::InternalError,
    },
};

/// Error codes carried in every [`ErrorDto`].
pub mod code {
    pub const INVALID_REQUEST: u16 = 1100;
    pub const UNAUTHORIZED: u16 = 1200;
    pub const BUSINESS_RULE: u16 = 3300;
    pub const DATABASE: u16 = 4400;
    pub const UNEXPECTED: u16 = 9900;
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` and
/// `BookingError` handle their own response mapping, while generic variants provide
/// standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking or invitation business rule violation.
    ///
    /// Delegates to `BookingError::into_response()` (400, 409 or 422).
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Internal invariant failure such as an unparsable stored value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM with the operation that failed.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error("{context}: {source}")]
    DbErr {
        /// Description of the operation that failed
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Failure of a nested service call.
    ///
    /// The response is produced by the wrapped error so that, for example, a missing
    /// slot still yields 404 when reached through the booking service.
    #[error("{context}: {source}")]
    ServiceErr {
        /// Description of the call that failed
        context: String,
        #[source]
        source: Box<AppError>,
    },

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(source: sea_orm::DbErr) -> Self {
        AppError::DbErr {
            context: "Database operation failed".to_string(),
            source,
        }
    }
}

impl AppError {
    /// Wraps a database error with the operation it belongs to.
    pub fn db(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        AppError::DbErr {
            context: context.into(),
            source,
        }
    }

    /// Returns a closure wrapping a nested service failure with context.
    ///
    /// Intended for `map_err`:
    ///
    /// ```rust,ignore
    /// let slot = slot_service
    ///     .get_slot(slot_id)
    ///     .await
    ///     .map_err(AppError::service("failed to fetch slot"))?;
    /// ```
    pub fn service(context: &'static str) -> impl FnOnce(AppError) -> AppError {
        move |source| AppError::ServiceErr {
            context: context.to_string(),
            source: Box::new(source),
        }
    }

    /// Unwraps every `ServiceErr` layer and returns the originating error.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::ServiceErr { source, .. } => source.root(),
            err => err,
        }
    }

    /// Returns the business rule sentinel behind this error, if any.
    pub fn booking_error(&self) -> Option<&BookingError> {
        match self.root() {
            AppError::BookingErr(err) => Some(err),
            _ => None,
        }
    }
}

/// Attaches operation context to repository results.
pub trait DbResultExt<T> {
    fn db_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> DbResultExt<T> for Result<T, sea_orm::DbErr> {
    fn db_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|source| AppError::db(context, source))
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authentication and booking errors delegate to their own response handling, service
/// wrappers delegate to the error they wrap, and other errors use standard mappings.
/// Internal errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For database, configuration and internal failures
/// - Variable - For `AuthErr`, `BookingErr` and `ServiceErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::ServiceErr { context, source } => {
                tracing::debug!("{}: {}", context, source);
                (*source).into_response()
            }
            Self::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    code: code::INVALID_REQUEST,
                    error: msg,
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    code: code::INVALID_REQUEST,
                    error: msg,
                }),
            )
                .into_response(),
            err @ Self::DbErr { .. } => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        code: code::DATABASE,
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                code: code::UNEXPECTED,
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
