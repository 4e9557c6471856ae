//! `SeaORM` Entity definitions

pub mod prelude;

pub mod booking;
pub mod game;
pub mod invitation;
pub mod leaderboard;
pub mod notification;
pub mod slot;
pub mod user;
