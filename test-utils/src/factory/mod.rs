//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let game = factory::game::create_game(&db).await?;
//! let slot = factory::slot::create_slot(&db, game.id).await?;
//!
//! // Game, open future slot and two users in one call
//! let (game, slot, host, guest) = factory::helpers::create_slot_with_players(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .name("Foosball")
//!     .max_players(4)
//!     .build()
//!     .await?;
//!
//! let past_slot = factory::slot::SlotFactory::new(&db, game.id)
//!     .starts_in(Duration::minutes(-10))
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod game;
pub mod helpers;
pub mod invitation;
pub mod notification;
pub mod slot;
pub mod user;

pub use booking::create_booking;
pub use game::create_game;
pub use invitation::create_invitation;
pub use notification::create_notification;
pub use slot::create_slot;
pub use user::create_user;
