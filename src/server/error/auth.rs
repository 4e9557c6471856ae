use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDto, server::error::code};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but its subject no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(Uuid),

    /// User is authenticated but lacks a required permission.
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),

    /// Email and password do not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signing a new token failed.
    #[error("Failed to create token: {0}")]
    TokenCreation(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token and credential problems map to 401 Unauthorized, missing permissions to
/// 403 Forbidden. Client-facing messages stay generic; details are logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid token, unknown user, bad credentials
/// - 403 Forbidden - Authenticated user lacks permission
/// - 500 Internal Server Error - Token signing failure
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, code, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                code::UNAUTHORIZED,
                "Authentication required",
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                code::UNAUTHORIZED,
                "Invalid email or password",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                code::UNAUTHORIZED,
                "You do not have permission to perform this action",
            ),
            Self::TokenCreation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                code::UNEXPECTED,
                "Internal server error",
            ),
        };

        (
            status,
            Json(ErrorDto {
                code,
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
