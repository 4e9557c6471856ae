use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub slot_id: Uuid,
    pub game_id: Uuid,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedDto {
    pub booking_id: Uuid,
}

/// A booking together with its slot timing and everyone booked in the slot.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BookingDto {
    pub booking_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
    pub game: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub booked_users: Vec<String>,
    /// `pending`, `win` or `loss`
    pub result: String,
}
