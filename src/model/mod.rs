//! API data transfer objects shared by controllers and the OpenAPI document.

pub mod api;
pub mod auth;
pub mod booking;
pub mod game;
pub mod invitation;
pub mod leaderboard;
pub mod notification;
pub mod slot;
pub mod user;
