use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated user.
///
/// # Returns
/// - `200 OK` - The current user
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all users, used to pick someone to invite.
///
/// # Returns
/// - `200 OK` - Users ordered by username
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db).get_all_users().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
