use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        game::{CreateGameDto, GameDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game::CreateGameParams,
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List every game.
///
/// # Returns
/// - `200 OK` - Games ordered by name
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_games(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let games = GameService::new(&state.db).get_all_games().await?;

    let games_dto: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// Create a game.
///
/// New games are active and receive slots at the next seeding.
///
/// # Access Control
/// - `Admin` - Only admins can create games
///
/// # Returns
/// - `201 Created` - Game created
/// - `400 Bad Request` - Invalid name or player bounds
/// - `403 Forbidden` - User is not an admin
/// - `409 Conflict` - Name already used
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Game name already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let game = GameService::new(&state.db)
        .create_game(CreateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Get a game by ID.
#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "The game", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let game = GameService::new(&state.db).get_game(game_id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game.
///
/// Refused while any slot references the game.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
///
/// # Returns
/// - `200 OK` - Game deleted
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Game not found
/// - `409 Conflict` - Game still has slots
#[utoipa::path(
    delete,
    path = "/api/games/{game_id}",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Game deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Game still has slots", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    GameService::new(&state.db).delete_game(game_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Game deleted".to_string(),
        }),
    ))
}

/// Toggle whether a game is active.
///
/// # Access Control
/// - `Admin` - Only admins can change game status
#[utoipa::path(
    put,
    path = "/api/games/{game_id}/status",
    tag = GAME_TAG,
    params(
        ("game_id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Updated game", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
)]
pub async fn toggle_game_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(game_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let game = GameService::new(&state.db)
        .toggle_game_status(game_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
