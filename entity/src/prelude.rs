//! `SeaORM` Entity prelude

pub use super::booking::Entity as Booking;
pub use super::game::Entity as Game;
pub use super::invitation::Entity as Invitation;
pub use super::leaderboard::Entity as Leaderboard;
pub use super::notification::Entity as Notification;
pub use super::slot::Entity as Slot;
pub use super::user::Entity as User;
