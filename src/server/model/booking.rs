//! Booking domain models.

use chrono::{DateTime, NaiveDate, Utc};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use sea_orm::DbErr;

use crate::{model::booking::BookingDto, server::error::internal::InternalError};

/// Outcome recorded against a booking. Written once, from `Pending` to `Win` or `Loss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingResult {
    Pending,
    Win,
    Loss,
}

impl BookingResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingResult::Pending => "pending",
            BookingResult::Win => "win",
            BookingResult::Loss => "loss",
        }
    }
}

impl fmt::Display for BookingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingResult {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(BookingResult::Pending),
            "win" => Ok(BookingResult::Win),
            "loss" => Ok(BookingResult::Loss),
            other => Err(InternalError::UnknownBookingResult(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub slot_id: Uuid,
    pub user_id: Uuid,
    pub result: BookingResult,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(DbErr::Type)` - Stored result is not a known value
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            slot_id: entity.slot_id,
            user_id: entity.user_id,
            result: parse_result(&entity.result)?,
            created_at: entity.created_at,
        })
    }
}

/// Parses a stored result column.
pub fn parse_result(value: &str) -> Result<BookingResult, DbErr> {
    value
        .parse()
        .map_err(|e: InternalError| DbErr::Type(e.to_string()))
}

/// Read projection of a booking with its slot, game and every booked username.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub booking_id: Uuid,
    pub slot_id: Uuid,
    pub game_id: Uuid,
    pub game_name: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub booked_users: Vec<String>,
    pub result: BookingResult,
}

impl BookingSummary {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            booking_id: self.booking_id,
            slot_id: self.slot_id,
            game_id: self.game_id,
            game: self.game_name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            booked_users: self.booked_users,
            result: self.result.to_string(),
        }
    }
}
