//! Invitation domain models.
//!
//! An invitation row exists only while it is pending. Accepting, rejecting, or finding
//! it invalid at acceptance deletes the row.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::model::invitation::InvitationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: Uuid,
    pub inviting_user_id: Uuid,
    pub invited_user_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn from_entity(entity: entity::invitation::Model) -> Self {
        Self {
            id: entity.id,
            inviting_user_id: entity.inviting_user_id,
            invited_user_id: entity.invited_user_id,
            slot_id: entity.slot_id,
            game_id: entity.game_id,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInvitationParams {
    pub inviting_user_id: Uuid,
    pub invited_user_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
}

/// Read projection of a pending invitation for the invitee.
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationSummary {
    pub invitation_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
    pub game_name: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub booked_users: Vec<String>,
    /// Username of the inviting user.
    pub invited_by: String,
}

impl InvitationSummary {
    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            invitation_id: self.invitation_id,
            slot_id: self.slot_id,
            game_id: self.game_id,
            game: self.game_name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            booked_users: self.booked_users,
            invited_by: self.invited_by,
        }
    }
}
