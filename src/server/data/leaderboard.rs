//! Leaderboard data repository for database operations.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::model::leaderboard::{LeaderboardEntry, LeaderboardRow};

pub struct LeaderboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeaderboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user's stats for one game.
    ///
    /// # Returns
    /// - `Ok(Some(LeaderboardEntry))` - User has recorded results for the game
    /// - `Ok(None)` - No results recorded yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, DbErr> {
        let entity = entity::prelude::Leaderboard::find()
            .filter(entity::leaderboard::Column::UserId.eq(user_id))
            .filter(entity::leaderboard::Column::GameId.eq(game_id))
            .one(self.db)
            .await?;

        Ok(entity.map(LeaderboardEntry::from_entity))
    }

    /// Inserts or replaces the counters and score for a (user, game) pair.
    ///
    /// # Returns
    /// - `Ok(LeaderboardEntry)` - The stored entry
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, entry: LeaderboardEntry) -> Result<LeaderboardEntry, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::Leaderboard::insert(entity::leaderboard::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(entry.user_id),
            game_id: ActiveValue::Set(entry.game_id),
            wins: ActiveValue::Set(entry.wins),
            losses: ActiveValue::Set(entry.losses),
            score: ActiveValue::Set(entry.score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::leaderboard::Column::UserId,
                entity::leaderboard::Column::GameId,
            ])
            .update_columns([
                entity::leaderboard::Column::Wins,
                entity::leaderboard::Column::Losses,
                entity::leaderboard::Column::Score,
                entity::leaderboard::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(LeaderboardEntry::from_entity(entity))
    }

    /// Gets the ranking for a game, highest score first.
    pub async fn get_game_leaderboard(&self, game_id: Uuid) -> Result<Vec<LeaderboardRow>, DbErr> {
        let rows = entity::prelude::Leaderboard::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::leaderboard::Column::GameId.eq(game_id))
            .order_by_desc(entity::leaderboard::Column::Score)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, user)| {
                user.map(|user| LeaderboardRow {
                    username: user.username,
                    score: entry.score,
                })
            })
            .collect())
    }
}
