//! Leaderboard domain models and the ranking score.

use uuid::Uuid;

use crate::{
    model::leaderboard::{LeaderboardEntryDto, UserGameStatsDto},
    server::{error::AppError, model::booking::BookingResult},
};

/// Per-user, per-game win/loss aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: Uuid,
    pub game_id: Uuid,
    pub wins: i32,
    pub losses: i32,
    pub score: f64,
}

impl LeaderboardEntry {
    pub fn from_entity(entity: entity::leaderboard::Model) -> Self {
        Self {
            user_id: entity.user_id,
            game_id: entity.game_id,
            wins: entity.wins,
            losses: entity.losses,
            score: entity.score,
        }
    }

    /// Starting point for a user with no recorded games.
    pub fn empty(user_id: Uuid, game_id: Uuid) -> Self {
        Self {
            user_id,
            game_id,
            wins: 0,
            losses: 0,
            score: 0.0,
        }
    }

    /// Applies one outcome and recomputes the score.
    pub fn record(mut self, outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.score = score(self.wins, self.losses);
        self
    }

    pub fn into_dto(self) -> UserGameStatsDto {
        UserGameStatsDto {
            game_id: self.game_id,
            wins: self.wins,
            losses: self.losses,
            score: self.score,
        }
    }
}

/// One leaderboard row as shown for a game.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub username: String,
    pub score: f64,
}

impl LeaderboardRow {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            user_name: self.username,
            score: self.score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win,
    Loss,
}

impl MatchOutcome {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "win" => Ok(MatchOutcome::Win),
            "loss" => Ok(MatchOutcome::Loss),
            other => Err(AppError::BadRequest(format!(
                "Result must be 'win' or 'loss', got '{}'",
                other
            ))),
        }
    }
}

impl From<MatchOutcome> for BookingResult {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Win => BookingResult::Win,
            MatchOutcome::Loss => BookingResult::Loss,
        }
    }
}

/// Ranking score rewarding both win rate and volume played.
///
/// `ratio * (1 + sqrt(wins + losses)) / 100` where `ratio` is `wins / losses`, or `wins`
/// when there are no losses.
pub fn score(wins: i32, losses: i32) -> f64 {
    let wins = f64::from(wins);
    let losses = f64::from(losses);

    let ratio = if losses == 0.0 { wins } else { wins / losses };

    ratio * (1.0 + (wins + losses).sqrt()) / 100.0
}
