use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateInvitationDto {
    pub invited_user_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct InvitationCreatedDto {
    pub invitation_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InvitationDto {
    pub invitation_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
    pub game: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub booked_users: Vec<String>,
    pub invited_by: String,
}
