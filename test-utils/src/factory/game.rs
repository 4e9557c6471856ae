//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test games with customizable fields.
///
/// Defaults to a two player game with one instance that is active.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    min_players: i32,
    max_players: i32,
    instances: i32,
    is_active: bool,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Game {id}"`
    /// - min_players: `2`
    /// - max_players: `2`
    /// - instances: `1`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
            min_players: 2,
            max_players: 2,
            instances: 1,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn min_players(mut self, min_players: i32) -> Self {
        self.min_players = min_players;
        self
    }

    /// Sets the slot capacity. Lowers `min_players` when it would exceed the new maximum.
    pub fn max_players(mut self, max_players: i32) -> Self {
        self.max_players = max_players;
        self.min_players = self.min_players.min(max_players);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            min_players: ActiveValue::Set(self.min_players),
            max_players: ActiveValue::Set(self.max_players),
            instances: ActiveValue::Set(self.instances),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
