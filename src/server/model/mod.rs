//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data layer boundary;
//! services and controllers work only with these models. Each model provides
//! `from_entity` for the repository side and `into_dto` for the API side.

pub mod booking;
pub mod game;
pub mod invitation;
pub mod leaderboard;
pub mod notification;
pub mod slot;
pub mod user;
