//! Game data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::game::{CreateGameParams, Game};

/// Repository providing database operations for games.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, toggling, and deleting game records.
pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active game.
    ///
    /// # Arguments
    /// - `params` - Validated name and player bounds
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(DbErr)` - Database error during insert (including duplicate name)
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr> {
        let now = Utc::now();
        let entity = entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            min_players: ActiveValue::Set(params.min_players),
            max_players: ActiveValue::Set(params.max_players),
            instances: ActiveValue::Set(params.instances),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Gets a game by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, game_id: Uuid) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(game_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets all games ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Gets active games, the set that receives daily slots.
    pub async fn get_active(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::IsActive.eq(true))
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the active flag and bumps `updated_at`.
    ///
    /// # Arguments
    /// - `game_id` - Game to update
    /// - `is_active` - New active flag
    /// - `now` - Timestamp stored as `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The updated game
    /// - `Ok(None)` - No game with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(
        &self,
        game_id: Uuid,
        is_active: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(game_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model = entity.into_active_model();
        active_model.is_active = ActiveValue::Set(is_active);
        active_model.updated_at = ActiveValue::Set(now);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Game::from_entity(updated)))
    }

    /// Deletes a game by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Game deleted
    /// - `Ok(false)` - No game with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, game_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Game::delete_by_id(game_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
