use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LeaderboardEntryDto {
    pub user_name: String,
    pub score: f64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct RecordResultDto {
    pub game_id: Uuid,
    pub booking_id: Uuid,
    /// `win` or `loss`
    pub result: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserGameStatsDto {
    pub game_id: Uuid,
    pub wins: i32,
    pub losses: i32,
    pub score: f64,
}
