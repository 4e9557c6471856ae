//! HTTP handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts DTOs to domain parameters, calls one service, and converts the result back
//! to a DTO. Handlers carry `utoipa::path` annotations collected by the router.

pub mod auth;
pub mod booking;
pub mod game;
pub mod invitation;
pub mod leaderboard;
pub mod notification;
pub mod slot;
pub mod user;
