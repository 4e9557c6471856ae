use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, slot::SlotDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{booking::BookingService, slot::SlotService},
        state::AppState,
    },
};

/// Tag for grouping slot endpoints in OpenAPI documentation
pub static SLOT_TAG: &str = "slot";

/// Get today's slots for a game.
///
/// "Today" is the calendar date in the configured slot time zone.
///
/// # Returns
/// - `200 OK` - Slots ordered by start time
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Game not found
#[utoipa::path(
    get,
    path = "/api/slots/games/{game_id}",
    tag = SLOT_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Today's slots", body = Vec<SlotDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_current_day_slots(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let slots = SlotService::new(&state.db, state.slot_offset)
        .get_current_day_slots(game_id)
        .await?;

    let slots_dto: Vec<SlotDto> = slots.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(slots_dto)))
}

#[utoipa::path(
    get,
    path = "/api/slots/{slot_id}",
    tag = SLOT_TAG,
    params(
        ("slot_id" = Uuid, Path, description = "Slot ID")
    ),
    responses(
        (status = 200, description = "The slot", body = SlotDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto)
    ),
)]
pub async fn get_slot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let slot = SlotService::new(&state.db, state.slot_offset)
        .get_slot(slot_id)
        .await?;

    Ok((StatusCode::OK, Json(slot.into_dto())))
}

/// List the usernames booked into a slot.
///
/// # Returns
/// - `200 OK` - Usernames of the slot's players
/// - `404 Not Found` - Slot not found
#[utoipa::path(
    get,
    path = "/api/slots/{slot_id}/players",
    tag = SLOT_TAG,
    params(
        ("slot_id" = Uuid, Path, description = "Slot ID")
    ),
    responses(
        (status = 200, description = "Booked usernames", body = Vec<String>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slot_players(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slot_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    SlotService::new(&state.db, state.slot_offset)
        .get_slot(slot_id)
        .await?;

    let usernames = BookingService::new(&state.db, state.slot_offset)
        .get_slot_booked_users(slot_id)
        .await?;

    Ok((StatusCode::OK, Json(usernames)))
}
