use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingCreatedDto, BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct BookingListParams {
    /// `upcoming` (default) or `pending-results`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Book a slot for the authenticated user.
///
/// The booking that brings the slot to the game's `max_players` closes the slot.
///
/// # Returns
/// - `201 Created` - Booking created
/// - `400 Bad Request` - Slot belongs to another game
/// - `404 Not Found` - Slot not found
/// - `409 Conflict` - Slot full or user already booked
/// - `422 Unprocessable Entity` - Slot already started
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingCreatedDto),
        (status = 400, description = "Slot does not belong to the game", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Slot fully booked or already booked by user", body = ErrorDto),
        (status = 422, description = "Slot has already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db, state.slot_offset)
        .make_booking(user.id, payload.slot_id, payload.game_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedDto {
            booking_id: booking.id,
        }),
    ))
}

/// List the authenticated user's bookings.
///
/// `type=upcoming` returns bookings whose slot has not started. `type=pending-results`
/// returns bookings whose slot has ended without a recorded result.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("type" = Option<String>, Query, description = "upcoming (default) or pending-results")
    ),
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 400, description = "Unknown list type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BookingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = BookingService::new(&state.db, state.slot_offset);

    let bookings = match params.kind.as_deref().unwrap_or("upcoming") {
        "upcoming" => service.get_upcoming_bookings(user.id).await?,
        "pending-results" => service.get_bookings_to_update_result(user.id).await?,
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown booking list type '{}'",
                other
            )))
        }
    };

    let bookings_dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}
