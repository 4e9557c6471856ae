//! Game service for catalogue management.

use chrono::Utc;
use sea_orm::{ConnectionTrait, SqlErr};
use uuid::Uuid;

use crate::server::{
    data::{game::GameRepository, slot::SlotRepository},
    error::{booking::BookingError, AppError, DbResultExt},
    model::game::{CreateGameParams, Game},
};

/// Service providing business logic for games.
pub struct GameService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all_games(&self) -> Result<Vec<Game>, AppError> {
        GameRepository::new(self.db)
            .get_all()
            .await
            .db_context("failed to fetch games")
    }

    /// Gets a game by its ID.
    ///
    /// # Returns
    /// - `Ok(Game)` - The game
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_game(&self, game_id: Uuid) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .get_by_id(game_id)
            .await
            .db_context("failed to fetch game")?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }

    /// Creates a game after validating its player bounds.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created, active game
    /// - `Err(AppError::BadRequest)` - Invalid name or player bounds
    /// - `Err(BookingError::AlreadyExists)` - A game with the same name exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_game(&self, params: CreateGameParams) -> Result<Game, AppError> {
        params.validate()?;

        let game_repo = GameRepository::new(self.db);

        if game_repo
            .exists_by_name(&params.name)
            .await
            .db_context("failed to check game name")?
        {
            return Err(BookingError::AlreadyExists(format!(
                "Game '{}' already exists",
                params.name
            ))
            .into());
        }

        let name = params.name.clone();
        match game_repo.create(params).await {
            Ok(game) => {
                tracing::info!("Created game {} ({})", game.name, game.id);
                Ok(game)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(BookingError::AlreadyExists(format!("Game '{}' already exists", name)).into())
            }
            Err(err) => Err(AppError::db("failed to create game", err)),
        }
    }

    /// Deletes a game that no slot references.
    ///
    /// # Returns
    /// - `Ok(())` - Game deleted
    /// - `Err(AppError::NotFound)` - No game with that ID
    /// - `Err(BookingError::AlreadyExists)` - Slots still reference the game
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn delete_game(&self, game_id: Uuid) -> Result<(), AppError> {
        let game = self.get_game(game_id).await?;

        let slot_count = SlotRepository::new(self.db)
            .count_by_game(game_id)
            .await
            .db_context("failed to count game slots")?;
        if slot_count > 0 {
            return Err(BookingError::AlreadyExists(format!(
                "Game '{}' still has {} slots and cannot be deleted",
                game.name, slot_count
            ))
            .into());
        }

        let deleted = GameRepository::new(self.db)
            .delete(game_id)
            .await
            .db_context("failed to delete game")?;
        if !deleted {
            return Err(AppError::NotFound(format!("Game {} not found", game_id)));
        }

        tracing::info!("Deleted game {} ({})", game.name, game_id);

        Ok(())
    }

    /// Flips the active flag of a game. Inactive games get no new slots.
    pub async fn toggle_game_status(&self, game_id: Uuid) -> Result<Game, AppError> {
        let game = self.get_game(game_id).await?;

        GameRepository::new(self.db)
            .set_active(game_id, !game.is_active, Utc::now())
            .await
            .db_context("failed to update game status")?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }
}
