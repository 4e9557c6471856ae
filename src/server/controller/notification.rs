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
        notification::NotificationDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List the authenticated user's notifications, newest first.
///
/// # Returns
/// - `200 OK` - Read and unread notifications
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let notifications = NotificationService::new(&state.db)
        .get_user_notifications(user.id)
        .await?;

    let notifications_dto: Vec<NotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// Mark one of the authenticated user's notifications as read.
///
/// # Returns
/// - `200 OK` - Notification marked read
/// - `404 Not Found` - No such notification for the user
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .mark_as_read(user.id, notification_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Notification marked as read".to_string(),
        }),
    ))
}
