//! Slot data repository for database operations.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::slot::{CreateSlotParams, Slot};

/// Repository providing database operations for slots.
pub struct SlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, slot_id: Uuid) -> Result<Option<Slot>, DbErr> {
        let entity = entity::prelude::Slot::find_by_id(slot_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Slot::from_entity))
    }

    /// Gets all slots of a game on a calendar date, ordered by start time.
    pub async fn get_by_game_and_date(
        &self,
        game_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Slot>, DbErr> {
        let entities = entity::prelude::Slot::find()
            .filter(entity::slot::Column::GameId.eq(game_id))
            .filter(entity::slot::Column::Date.eq(date))
            .order_by_asc(entity::slot::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Slot::from_entity).collect())
    }

    pub async fn count_by_game_and_date(
        &self,
        game_id: Uuid,
        date: NaiveDate,
    ) -> Result<u64, DbErr> {
        entity::prelude::Slot::find()
            .filter(entity::slot::Column::GameId.eq(game_id))
            .filter(entity::slot::Column::Date.eq(date))
            .count(self.db)
            .await
    }

    /// Counts every slot of a game regardless of date.
    pub async fn count_by_game(&self, game_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Slot::find()
            .filter(entity::slot::Column::GameId.eq(game_id))
            .count(self.db)
            .await
    }

    /// Inserts slots in a single statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of slots inserted (0 when `params` is empty)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<CreateSlotParams>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let count = params.len() as u64;
        let now = Utc::now();
        let models = params.into_iter().map(|param| entity::slot::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(param.game_id),
            date: ActiveValue::Set(param.date),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            is_booked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
        });

        entity::prelude::Slot::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(count)
    }

    /// Sets `is_booked` to true.
    ///
    /// # Returns
    /// - `Ok(true)` - Slot updated
    /// - `Ok(false)` - No slot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_booked(&self, slot_id: Uuid) -> Result<bool, DbErr> {
        let update = entity::prelude::Slot::update_many()
            .col_expr(entity::slot::Column::IsBooked, Expr::value(true))
            .filter(entity::slot::Column::Id.eq(slot_id))
            .exec(self.db)
            .await?;

        Ok(update.rows_affected > 0)
    }
}
