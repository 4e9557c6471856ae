use crate::server::{
    data::{
        booking::BookingRepository, invitation::InvitationRepository,
        notification::NotificationRepository,
    },
    error::{booking::BookingError, AppError},
    model::invitation::CreateInvitationParams,
    service::invitation::InvitationService,
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use super::ist;

mod accept_invitation;
mod get_all_pending_invitations;
mod make_invitation;

fn invite(
    inviting: &entity::user::Model,
    invited: &entity::user::Model,
    slot: &entity::slot::Model,
) -> CreateInvitationParams {
    CreateInvitationParams {
        inviting_user_id: inviting.id,
        invited_user_id: invited.id,
        slot_id: slot.id,
        game_id: slot.game_id,
    }
}
