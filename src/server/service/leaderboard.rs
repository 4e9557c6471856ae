//! Leaderboard service for recording match results and ranking players.

use chrono::FixedOffset;
use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{booking::BookingRepository, leaderboard::LeaderboardRepository},
    error::{booking::BookingError, AppError, DbResultExt},
    model::{
        booking::BookingResult,
        leaderboard::{LeaderboardEntry, LeaderboardRow, MatchOutcome},
    },
    service::{booking::BookingService, game::GameService, slot::SlotService},
    util::time::now_in,
};

pub struct LeaderboardService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    offset: FixedOffset,
}

impl<'a, C: ConnectionTrait + TransactionTrait> LeaderboardService<'a, C> {
    pub fn new(db: &'a C, offset: FixedOffset) -> Self {
        Self { db, offset }
    }

    /// Records the outcome of a played booking and updates the user's game stats.
    ///
    /// The stats upsert and the booking result update commit together.
    ///
    /// # Arguments
    /// - `user_id` - User reporting the result
    /// - `game_id` - Game the booking was played in
    /// - `booking_id` - Booking being resolved
    /// - `outcome` - Win or loss
    ///
    /// # Returns
    /// - `Ok(LeaderboardEntry)` - Updated stats for the user and game
    /// - `Err(AppError::NotFound)` - Booking missing or held by another user
    /// - `Err(AppError::BadRequest)` - Booking is for another game, or its slot has not ended
    /// - `Err(BookingError::AlreadyExists)` - A result was already recorded
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn record_result(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        booking_id: Uuid,
        outcome: MatchOutcome,
    ) -> Result<LeaderboardEntry, AppError> {
        let txn = self
            .db
            .begin()
            .await
            .db_context("failed to begin result transaction")?;

        let booking = BookingRepository::new(&txn)
            .get_by_id(booking_id)
            .await
            .db_context("failed to fetch booking")?
            .filter(|booking| booking.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        let slot = SlotService::new(&txn, self.offset)
            .get_slot(booking.slot_id)
            .await
            .map_err(AppError::service("failed to fetch slot for result"))?;

        if slot.game_id != game_id {
            return Err(AppError::BadRequest(format!(
                "Booking {} is not for game {}",
                booking_id, game_id
            )));
        }

        if booking.result != BookingResult::Pending {
            return Err(BookingError::AlreadyExists(format!(
                "Result already recorded for booking {}",
                booking_id
            ))
            .into());
        }

        if slot.end_time > now_in(self.offset) {
            return Err(AppError::BadRequest(
                "Results can only be recorded after the slot ends".to_string(),
            ));
        }

        let leaderboard_repo = LeaderboardRepository::new(&txn);
        let entry = leaderboard_repo
            .get_by_user_and_game(user_id, game_id)
            .await
            .db_context("failed to fetch leaderboard entry")?
            .unwrap_or_else(|| LeaderboardEntry::empty(user_id, game_id))
            .record(outcome);

        let entry = leaderboard_repo
            .upsert(entry)
            .await
            .db_context("failed to store leaderboard entry")?;

        BookingService::new(&txn, self.offset)
            .update_booking_result(booking_id, outcome.into())
            .await
            .map_err(AppError::service("failed to update booking result"))?;

        txn.commit()
            .await
            .db_context("failed to commit result transaction")?;

        Ok(entry)
    }

    /// Gets a game's ranking, highest score first.
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardRow>)` - Username and score per player with results
    /// - `Err(AppError::NotFound)` - Game does not exist
    pub async fn get_game_leaderboard(
        &self,
        game_id: Uuid,
    ) -> Result<Vec<LeaderboardRow>, AppError> {
        GameService::new(self.db).get_game(game_id).await?;

        LeaderboardRepository::new(self.db)
            .get_game_leaderboard(game_id)
            .await
            .db_context("failed to fetch leaderboard")
    }

    pub async fn get_user_game_stats(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, AppError> {
        LeaderboardRepository::new(self.db)
            .get_by_user_and_game(user_id, game_id)
            .await
            .db_context("failed to fetch leaderboard entry")
    }
}
