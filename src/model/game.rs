use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct GameDto {
    pub id: Uuid,
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    pub instances: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    #[serde(default = "default_instances")]
    pub instances: i32,
}

fn default_instances() -> i32 {
    1
}
