use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, SignupDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError, model::user::SignupParams, service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Create an account.
///
/// The first account registered while no admin exists receives the admin role.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Blank username, malformed email or short password
/// - `409 Conflict` - Username or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.jwt)
        .signup(SignupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Bearer token and the logged in user
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}
