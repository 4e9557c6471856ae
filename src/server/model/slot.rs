//! Slot domain models and parameters.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::model::slot::SlotDto;

/// One fixed-length play window for a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: Uuid,
    pub game_id: Uuid,
    /// Calendar date in the configured slot time zone.
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Set once the booking count reaches the game's `max_players`.
    pub is_booked: bool,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    pub fn into_dto(self) -> SlotDto {
        SlotDto {
            id: self.id,
            game_id: self.game_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            is_booked: self.is_booked,
        }
    }

    pub fn from_entity(entity: entity::slot::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            is_booked: entity.is_booked,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSlotParams {
    pub game_id: Uuid,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Daily window that seeding divides into slots.
#[derive(Debug, Clone)]
pub struct SlotWindow {
    /// Local time of the first slot start.
    pub start: NaiveTime,
    /// Local time no slot may end after.
    pub end: NaiveTime,
    pub length: Duration,
}
