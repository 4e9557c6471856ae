use crate::server::{
    data::invitation::InvitationRepository, model::invitation::CreateInvitationParams,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete;
