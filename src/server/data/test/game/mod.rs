use crate::server::{data::game::GameRepository, model::game::CreateGameParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod set_active;
