use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        invitation::{CreateInvitationDto, InvitationCreatedDto, InvitationDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::invitation::CreateInvitationParams,
        service::invitation::InvitationService, state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

#[derive(Deserialize)]
pub struct InvitationActionParams {
    /// `accept` or `reject`
    pub action: String,
}

/// Invite another user to a slot.
///
/// # Returns
/// - `201 Created` - Invitation created
/// - `400 Bad Request` - Self invitation, or slot belongs to another game
/// - `404 Not Found` - Slot not found
/// - `409 Conflict` - Invitation already sent, or slot full
/// - `422 Unprocessable Entity` - Slot already ended
#[utoipa::path(
    post,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    request_body = CreateInvitationDto,
    responses(
        (status = 201, description = "Invitation created", body = InvitationCreatedDto),
        (status = 400, description = "Self invitation or slot/game mismatch", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Slot not found", body = ErrorDto),
        (status = 409, description = "Invitation already sent or slot full", body = ErrorDto),
        (status = 422, description = "Slot has already ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_invitation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let invitation_id = InvitationService::new(&state.db, state.slot_offset)
        .make_invitation(CreateInvitationParams {
            inviting_user_id: user.id,
            invited_user_id: payload.invited_user_id,
            slot_id: payload.slot_id,
            game_id: payload.game_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InvitationCreatedDto { invitation_id }),
    ))
}

/// List invitations addressed to the authenticated user for slots that have not started.
#[utoipa::path(
    get,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    responses(
        (status = 200, description = "Pending invitations", body = Vec<InvitationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_invitations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let invitations = InvitationService::new(&state.db, state.slot_offset)
        .get_all_pending_invitations(user.id)
        .await?;

    let invitations_dto: Vec<InvitationDto> =
        invitations.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(invitations_dto)))
}

/// Accept or reject an invitation.
///
/// Only the invited user may resolve an invitation; for anyone else it does not exist.
/// Accepting books the slot for the invited user.
///
/// # Returns
/// - `200 OK` - Invitation resolved
/// - `400 Bad Request` - Unknown action
/// - `404 Not Found` - Invitation not found
/// - `409 Conflict` - Slot full or already booked (invitation removed)
#[utoipa::path(
    put,
    path = "/api/invitations/{invitation_id}",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = Uuid, Path, description = "Invitation ID"),
        ("action" = String, Query, description = "accept or reject")
    ),
    responses(
        (status = 200, description = "Invitation resolved", body = MessageDto),
        (status = 400, description = "Unknown action", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 409, description = "Slot fully booked or already booked by user", body = ErrorDto),
        (status = 422, description = "Slot has already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invitation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(invitation_id): Path<Uuid>,
    Query(params): Query<InvitationActionParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let service = InvitationService::new(&state.db, state.slot_offset);

    let invitation = service.get_invitation(invitation_id).await?;
    if invitation.invited_user_id != user.id {
        return Err(AppError::NotFound(format!(
            "Invitation {} not found",
            invitation_id
        )));
    }

    let message = match params.action.as_str() {
        "accept" => {
            service.accept_invitation(invitation_id).await?;
            "Invitation accepted"
        }
        "reject" => {
            service.reject_invitation(invitation_id).await?;
            "Invitation rejected"
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Action must be 'accept' or 'reject', got '{}'",
                other
            )))
        }
    };

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    ))
}
