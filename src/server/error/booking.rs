use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::code};

/// Business rule violations raised by the booking and invitation services.
///
/// Each variant is a distinct sentinel so callers can match on the kind of failure
/// without inspecting messages.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Duplicate invitation, duplicate resource, or a slot that has reached capacity
    /// when booking directly.
    #[error("{0}")]
    AlreadyExists(String),

    /// A user attempted to invite themselves.
    #[error("Users cannot invite themselves")]
    SelfInvite,

    /// The slot has already started (booking) or ended (invitation).
    #[error("Slot has already passed")]
    SlotPassed,

    /// The slot reached capacity before the invitation could be used.
    #[error("Slot is fully booked")]
    SlotFullyBooked,

    /// The user already holds a booking for this slot.
    #[error("User has already booked this slot")]
    UserAlreadyBooked,
}

/// # Returns
/// - 400 Bad Request - `SelfInvite`
/// - 409 Conflict - `AlreadyExists`, `SlotFullyBooked`, `UserAlreadyBooked`
/// - 422 Unprocessable Entity - `SlotPassed`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::SelfInvite => StatusCode::BAD_REQUEST,
            Self::SlotPassed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AlreadyExists(_) | Self::SlotFullyBooked | Self::UserAlreadyBooked => {
                StatusCode::CONFLICT
            }
        };

        (
            status,
            Json(ErrorDto {
                code: code::BUSINESS_RULE,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
