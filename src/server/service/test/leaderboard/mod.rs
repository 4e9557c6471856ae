use crate::server::{
    data::{booking::BookingRepository, leaderboard::LeaderboardRepository},
    error::{booking::BookingError, AppError},
    model::{booking::BookingResult, leaderboard::MatchOutcome},
    service::leaderboard::LeaderboardService,
};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use super::ist;


/// Creates a slot that ended ten minutes ago for the game.
async fn ended_slot(
    db: &sea_orm::DatabaseConnection,
    game_id: uuid::Uuid,
) -> Result<entity::slot::Model, sea_orm::DbErr> {
    factory::slot::SlotFactory::new(db, game_id)
        .starts_in(Duration::minutes(-30))
        .build()
        .await
}
