//! Slot service for lookups, capacity closure and daily seeding.

use chrono::{FixedOffset, NaiveDate, Utc};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::{game::GameRepository, slot::SlotRepository},
    error::{internal::InternalError, AppError, DbResultExt},
    model::slot::{CreateSlotParams, Slot, SlotWindow},
    util::time::today_in,
};

/// Service providing business logic for slots.
///
/// Generic over the connection so the booking service can run it inside its transaction.
pub struct SlotService<'a, C: ConnectionTrait> {
    db: &'a C,
    offset: FixedOffset,
}

impl<'a, C: ConnectionTrait> SlotService<'a, C> {
    /// Creates a new SlotService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    /// - `offset` - Reference time zone defining "today"
    ///
    /// # Returns
    /// - `SlotService` - New service instance
    pub fn new(db: &'a C, offset: FixedOffset) -> Self {
        Self { db, offset }
    }

    /// Gets a slot by its ID.
    ///
    /// # Returns
    /// - `Ok(Slot)` - The slot
    /// - `Err(AppError::NotFound)` - No slot with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_slot(&self, slot_id: Uuid) -> Result<Slot, AppError> {
        SlotRepository::new(self.db)
            .get_by_id(slot_id)
            .await
            .db_context("failed to fetch slot")?
            .ok_or_else(|| AppError::NotFound(format!("Slot {} not found", slot_id)))
    }

    /// Gets today's slots for a game, ordered by start time.
    ///
    /// # Returns
    /// - `Ok(Vec<Slot>)` - Slots dated today in the reference time zone
    /// - `Err(AppError::NotFound)` - Game does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_current_day_slots(&self, game_id: Uuid) -> Result<Vec<Slot>, AppError> {
        let game = GameRepository::new(self.db)
            .get_by_id(game_id)
            .await
            .db_context("failed to fetch game")?;
        if game.is_none() {
            return Err(AppError::NotFound(format!("Game {} not found", game_id)));
        }

        SlotRepository::new(self.db)
            .get_by_game_and_date(game_id, today_in(self.offset))
            .await
            .db_context("failed to fetch slots for today")
    }

    /// Marks a slot as fully booked.
    ///
    /// Only called from the booking capacity path.
    ///
    /// # Returns
    /// - `Ok(())` - Slot closed
    /// - `Err(AppError::NotFound)` - No slot with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_slot_as_booked(&self, slot_id: Uuid) -> Result<(), AppError> {
        let updated = SlotRepository::new(self.db)
            .mark_booked(slot_id)
            .await
            .db_context("failed to mark slot as booked")?;

        if !updated {
            return Err(AppError::NotFound(format!("Slot {} not found", slot_id)));
        }

        Ok(())
    }

    /// Creates today's slots for every active game that has none yet.
    ///
    /// Slots start at `window.start` and repeat every `window.length`. The last slot is
    /// the final one that still ends at or before `window.end`. Games that already have
    /// slots today are skipped, so calling this repeatedly on the same day is a no-op.
    ///
    /// # Arguments
    /// - `window` - Daily local window and slot length
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of slots created across all games
    /// - `Err(AppError::InternalErr)` - A window time does not exist in the offset
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn seed_daily_slots(&self, window: &SlotWindow) -> Result<u64, AppError> {
        let today = today_in(self.offset);
        let slot_repo = SlotRepository::new(self.db);

        let games = GameRepository::new(self.db)
            .get_active()
            .await
            .db_context("failed to fetch active games")?;

        let mut created = 0;
        for game in games {
            let existing = slot_repo
                .count_by_game_and_date(game.id, today)
                .await
                .db_context("failed to count today's slots")?;
            if existing > 0 {
                continue;
            }

            let params = self.day_slots(game.id, today, window)?;
            created += slot_repo
                .create_many(params)
                .await
                .db_context("failed to insert slots")?;

            tracing::debug!("Seeded slots for game {} on {}", game.name, today);
        }

        tracing::info!("Seeded {} slots for {}", created, today);

        Ok(created)
    }

    fn day_slots(
        &self,
        game_id: Uuid,
        date: NaiveDate,
        window: &SlotWindow,
    ) -> Result<Vec<CreateSlotParams>, AppError> {
        let mut slots = Vec::new();
        let mut start = window.start;

        loop {
            let (end, wrapped) = start.overflowing_add_signed(window.length);
            if wrapped != 0 || end > window.end {
                break;
            }

            let start_local = date
                .and_time(start)
                .and_local_timezone(self.offset)
                .single()
                .ok_or(InternalError::InvalidSlotTime { date, time: start })?;

            let start_time = start_local.with_timezone(&Utc);
            slots.push(CreateSlotParams {
                game_id,
                date,
                start_time,
                end_time: start_time + window.length,
            });

            start = end;
        }

        Ok(slots)
    }
}
