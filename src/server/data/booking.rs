//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for booking rows and the read projections
//! built from them. Projections join each booking to its slot, the slot's game, and the
//! usernames of everyone booked into the same slot.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::booking::{parse_result, Booking, BookingResult, BookingSummary};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending booking for the user in the slot.
    ///
    /// Capacity and timing are not checked here. Inserting a second booking for the same
    /// (slot, user) pair fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `slot_id` - Slot being booked
    /// - `user_id` - User holding the booking
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking with `Pending` result
    /// - `Err(DbErr)` - Database error during insert, including uniqueness violations
    pub async fn create(&self, slot_id: Uuid, user_id: Uuid) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            slot_id: ActiveValue::Set(slot_id),
            user_id: ActiveValue::Set(user_id),
            result: ActiveValue::Set(BookingResult::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    pub async fn get_by_id(&self, booking_id: Uuid) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Finds the booking a user holds for a slot.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The user is booked into the slot
    /// - `Ok(None)` - No booking for this pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_and_slot(
        &self,
        user_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::SlotId.eq(slot_id))
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Counts all bookings held in a slot.
    pub async fn count_by_slot(&self, slot_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::SlotId.eq(slot_id))
            .count(self.db)
            .await
    }

    /// Gets the user's bookings whose slot starts after `now`.
    ///
    /// Ordered by slot start time, earliest first.
    ///
    /// # Arguments
    /// - `user_id` - User whose bookings to fetch
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(Vec<BookingSummary>)` - Upcoming bookings with co-booked usernames
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_upcoming_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingSummary>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Slot)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::slot::Column::StartTime.gt(now))
            .order_by_asc(entity::slot::Column::StartTime)
            .all(self.db)
            .await?;

        self.summarize(rows).await
    }

    /// Gets the user's bookings whose slot has ended and whose result is still pending.
    ///
    /// Ordered by slot start time, most recent first.
    pub async fn get_pending_results_by_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingSummary>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Slot)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Result.eq(BookingResult::Pending.as_str()))
            .filter(entity::slot::Column::EndTime.lt(now))
            .order_by_desc(entity::slot::Column::StartTime)
            .all(self.db)
            .await?;

        self.summarize(rows).await
    }

    /// Sets the result column of a booking.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking updated
    /// - `Ok(false)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_result(
        &self,
        booking_id: Uuid,
        result: BookingResult,
    ) -> Result<bool, DbErr> {
        let update = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Result,
                Expr::value(result.as_str()),
            )
            .filter(entity::booking::Column::Id.eq(booking_id))
            .exec(self.db)
            .await?;

        Ok(update.rows_affected > 0)
    }

    /// Gets the usernames booked into a slot in booking order.
    pub async fn get_booked_usernames(&self, slot_id: Uuid) -> Result<Vec<String>, DbErr> {
        let mut by_slot = self.get_booked_usernames_by_slots(vec![slot_id]).await?;

        Ok(by_slot.remove(&slot_id).unwrap_or_default())
    }

    /// Gets booked usernames for several slots at once, keyed by slot ID.
    ///
    /// Slots without bookings are absent from the map.
    pub async fn get_booked_usernames_by_slots(
        &self,
        slot_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, DbErr> {
        if slot_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::booking::Column::SlotId.is_in(slot_ids))
            .order_by_asc(entity::booking::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut by_slot: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (booking, user) in rows {
            if let Some(user) = user {
                by_slot.entry(booking.slot_id).or_default().push(user.username);
            }
        }

        Ok(by_slot)
    }

    /// Builds summaries from booking/slot rows, loading game names and co-booked users
    /// with one query each.
    async fn summarize(
        &self,
        rows: Vec<(entity::booking::Model, Option<entity::slot::Model>)>,
    ) -> Result<Vec<BookingSummary>, DbErr> {
        let rows: Vec<(entity::booking::Model, entity::slot::Model)> = rows
            .into_iter()
            .filter_map(|(booking, slot)| slot.map(|slot| (booking, slot)))
            .collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let game_ids: Vec<Uuid> = rows.iter().map(|(_, slot)| slot.game_id).collect();
        let slot_ids: Vec<Uuid> = rows.iter().map(|(_, slot)| slot.id).collect();

        let game_names: HashMap<Uuid, String> = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(game_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|game| (game.id, game.name))
            .collect();

        let booked_users = self.get_booked_usernames_by_slots(slot_ids).await?;

        rows.into_iter()
            .map(|(booking, slot)| {
                Ok(BookingSummary {
                    booking_id: booking.id,
                    slot_id: slot.id,
                    game_id: slot.game_id,
                    game_name: game_names.get(&slot.game_id).cloned().unwrap_or_default(),
                    date: slot.date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    booked_users: booked_users.get(&slot.id).cloned().unwrap_or_default(),
                    result: parse_result(&booking.result)?,
                })
            })
            .collect()
    }
}
