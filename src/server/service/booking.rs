//! Booking service for slot reservations.
//!
//! `make_booking` is the only path that creates bookings and the only path that closes a
//! slot. The existence check runs strictly before the insert and the capacity check runs
//! on the post-insert count, all inside one transaction.

use chrono::FixedOffset;
use sea_orm::{ConnectionTrait, SqlErr, TransactionSession, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::booking::BookingRepository,
    error::{booking::BookingError, AppError, DbResultExt},
    model::booking::{Booking, BookingResult, BookingSummary},
    service::{game::GameService, slot::SlotService},
    util::time::now_in,
};

/// Service providing business logic for bookings.
///
/// This struct holds a reference to the database connection and the reference time
/// zone used for "slot has started" checks.
pub struct BookingService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    offset: FixedOffset,
}

impl<'a, C: ConnectionTrait + TransactionTrait> BookingService<'a, C> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    /// - `offset` - Reference time zone for "now"
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a C, offset: FixedOffset) -> Self {
        Self { db, offset }
    }

    /// Books a slot for a user.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. The slot must exist and belong to `game_id`
    /// 2. The slot must not be closed
    /// 3. The slot must not have started
    /// 4. The user must not already hold a booking for the slot
    ///
    /// The booking is then inserted, the slot's booking count re-read, and the slot
    /// closed when the count reaches the game's `max_players`. A count above
    /// `max_players` means a concurrent booking won the last seat; the transaction is
    /// rolled back.
    ///
    /// # Arguments
    /// - `user_id` - User making the booking
    /// - `slot_id` - Slot to book
    /// - `game_id` - Game the caller believes the slot belongs to
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::ServiceErr)` - Slot or game lookup failed (wraps `NotFound`)
    /// - `Err(AppError::BadRequest)` - Slot belongs to a different game
    /// - `Err(BookingError::AlreadyExists)` - Slot is fully booked
    /// - `Err(BookingError::SlotPassed)` - Slot start time is in the past
    /// - `Err(BookingError::UserAlreadyBooked)` - User already booked this slot
    /// - `Err(AppError::DbErr)` - Database error during insert or commit
    pub async fn make_booking(
        &self,
        user_id: Uuid,
        slot_id: Uuid,
        game_id: Uuid,
    ) -> Result<Booking, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .db_context("failed to begin booking transaction")?;

        let slot = SlotService::new(&txn, self.offset)
            .get_slot(slot_id)
            .await
            .map_err(AppError::service("failed to fetch slot for booking"))?;

        if slot.game_id != game_id {
            return Err(AppError::BadRequest(format!(
                "Slot {} does not belong to game {}",
                slot_id, game_id
            )));
        }

        if slot.is_booked {
            return Err(BookingError::AlreadyExists("Slot is fully booked".to_string()).into());
        }

        if slot.start_time < now_in(self.offset) {
            return Err(BookingError::SlotPassed.into());
        }

        let booking_repo = BookingRepository::new(&txn);

        let existing = booking_repo
            .get_by_user_and_slot(user_id, slot_id)
            .await
            .db_context("failed to check existing booking")?;
        if existing.is_some() {
            return Err(BookingError::UserAlreadyBooked.into());
        }

        let booking = match booking_repo.create(slot_id, user_id).await {
            Ok(booking) => booking,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(BookingError::UserAlreadyBooked.into());
            }
            Err(err) => return Err(AppError::db("failed to insert booking", err)),
        };

        let game = GameService::new(&txn)
            .get_game(slot.game_id)
            .await
            .map_err(AppError::service("failed to fetch game for booking"))?;

        let count = booking_repo
            .count_by_slot(slot_id)
            .await
            .db_context("failed to count slot bookings")?;

        let max_players = u64::try_from(game.max_players).unwrap_or(0);
        if count > max_players {
            return Err(BookingError::AlreadyExists("Slot is fully booked".to_string()).into());
        }

        if count == max_players {
            SlotService::new(&txn, self.offset)
                .mark_slot_as_booked(slot_id)
                .await
                .map_err(AppError::service("failed to close slot"))?;

            tracing::debug!("Slot {} reached {} players and is closed", slot_id, count);
        }

        txn.commit()
            .await
            .db_context("failed to commit booking transaction")?;

        Ok(booking)
    }

    /// Gets the user's bookings for slots that have not started, earliest first.
    pub async fn get_upcoming_bookings(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<BookingSummary>, AppError> {
        BookingRepository::new(self.db)
            .get_upcoming_by_user(user_id, now_in(self.offset).to_utc())
            .await
            .db_context("failed to fetch upcoming bookings")
    }

    /// Gets the user's bookings whose slot has ended but whose result is still pending.
    pub async fn get_bookings_to_update_result(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<BookingSummary>, AppError> {
        BookingRepository::new(self.db)
            .get_pending_results_by_user(user_id, now_in(self.offset).to_utc())
            .await
            .db_context("failed to fetch bookings awaiting a result")
    }

    /// Stores the result of a booking.
    ///
    /// # Returns
    /// - `Ok(())` - Result stored
    /// - `Err(AppError::NotFound)` - No booking with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_booking_result(
        &self,
        booking_id: Uuid,
        result: BookingResult,
    ) -> Result<(), AppError> {
        let updated = BookingRepository::new(self.db)
            .update_result(booking_id, result)
            .await
            .db_context("failed to update booking result")?;

        if !updated {
            return Err(AppError::NotFound(format!(
                "Booking {} not found",
                booking_id
            )));
        }

        Ok(())
    }

    /// Gets the usernames booked into a slot.
    pub async fn get_slot_booked_users(&self, slot_id: Uuid) -> Result<Vec<String>, AppError> {
        BookingRepository::new(self.db)
            .get_booked_usernames(slot_id)
            .await
            .db_context("failed to fetch booked users")
    }

    pub async fn get_booking_by_user_and_slot(
        &self,
        user_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Option<Booking>, AppError> {
        BookingRepository::new(self.db)
            .get_by_user_and_slot(user_id, slot_id)
            .await
            .db_context("failed to fetch booking")
    }
}
