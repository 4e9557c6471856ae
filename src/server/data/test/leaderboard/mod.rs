use crate::server::{
    data::leaderboard::LeaderboardRepository,
    model::leaderboard::{LeaderboardEntry, MatchOutcome},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_game_leaderboard;
mod upsert;
