use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{LeaderboardEntryDto, RecordResultDto, UserGameStatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::leaderboard::{LeaderboardEntry, MatchOutcome},
        service::{game::GameService, leaderboard::LeaderboardService},
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the ranking for a game.
///
/// # Returns
/// - `200 OK` - Username and score, highest score first
/// - `404 Not Found` - Game not found
#[utoipa::path(
    get,
    path = "/api/leaderboards/games/{game_id}",
    tag = LEADERBOARD_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_game_leaderboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let rows = LeaderboardService::new(&state.db, state.slot_offset)
        .get_game_leaderboard(game_id)
        .await?;

    let rows_dto: Vec<LeaderboardEntryDto> = rows.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rows_dto)))
}

/// Get the authenticated user's stats for a game.
///
/// A player without recorded results gets zeroed stats.
///
/// # Returns
/// - `200 OK` - Wins, losses and score for the game
/// - `404 Not Found` - Game not found
#[utoipa::path(
    get,
    path = "/api/leaderboards/games/{game_id}/me",
    tag = LEADERBOARD_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "User stats", body = UserGameStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_game_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    GameService::new(&state.db).get_game(game_id).await?;

    let entry = LeaderboardService::new(&state.db, state.slot_offset)
        .get_user_game_stats(user.id, game_id)
        .await?
        .unwrap_or_else(|| LeaderboardEntry::empty(user.id, game_id));

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Record a win or loss for one of the authenticated user's finished bookings.
///
/// # Returns
/// - `200 OK` - Updated stats for the game
/// - `400 Bad Request` - Invalid result, wrong game, or slot not finished
/// - `404 Not Found` - Booking not found for the user
/// - `409 Conflict` - Result already recorded
#[utoipa::path(
    post,
    path = "/api/leaderboards/results",
    tag = LEADERBOARD_TAG,
    request_body = RecordResultDto,
    responses(
        (status = 200, description = "Result recorded", body = UserGameStatsDto),
        (status = 400, description = "Invalid result submission", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Result already recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RecordResultDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let outcome = MatchOutcome::parse(&payload.result)?;

    let entry = LeaderboardService::new(&state.db, state.slot_offset)
        .record_result(user.id, payload.game_id, payload.booking_id, outcome)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}
