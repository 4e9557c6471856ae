//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique name generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game, an open slot starting in one hour, and two users.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, slot, first_user, second_user))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_slot_with_players(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::slot::Model,
        entity::user::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let slot = crate::factory::slot::create_slot(db, game.id).await?;
    let first = crate::factory::user::create_user(db).await?;
    let second = crate::factory::user::create_user(db).await?;

    Ok((game, slot, first, second))
}
