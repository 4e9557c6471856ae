//! Game domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::game::{CreateGameDto, GameDto},
    server::error::AppError,
};

/// A bookable game and the capacity of each of its slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub min_players: i32,
    /// Number of bookings that closes a slot.
    pub max_players: i32,
    pub instances: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            min_players: self.min_players,
            max_players: self.max_players,
            instances: self.instances,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            min_players: entity.min_players,
            max_players: entity.max_players,
            instances: entity.instances,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    pub instances: i32,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            min_players: dto.min_players,
            max_players: dto.max_players,
            instances: dto.instances,
        }
    }

    /// Checks `1 <= min_players <= max_players`, `instances >= 1` and a non-empty name.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::BadRequest("Game name must not be empty".to_string()));
        }
        if self.min_players < 1 || self.min_players > self.max_players {
            return Err(AppError::BadRequest(
                "Player counts must satisfy 1 <= min_players <= max_players".to_string(),
            ));
        }
        if self.instances < 1 {
            return Err(AppError::BadRequest(
                "A game needs at least one instance".to_string(),
            ));
        }

        Ok(())
    }
}
