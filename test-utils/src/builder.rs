use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Game, Slot};
///
/// let test = TestBuilder::new()
///     .with_table(Game)
///     .with_table(Slot)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    ///
    /// Composite unique indexes are not derived from entity definitions, so tests that
    /// rely on the database rejecting duplicates add them explicitly.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables and uniqueness indexes required for booking operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Game
    /// - Slot
    /// - Booking
    /// - Invitation
    /// - Leaderboard
    /// - Notification
    ///
    /// The unique indexes on `booking(slot_id, user_id)`,
    /// `invitation(inviting_user_id, invited_user_id, slot_id)` and
    /// `leaderboard(user_id, game_id)` match the production migrations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Game)
            .with_table(Slot)
            .with_table(Booking)
            .with_table(Invitation)
            .with_table(Leaderboard)
            .with_table(Notification)
            .with_index(
                Index::create()
                    .name("idx_booking_slot_id_user_id")
                    .table(Booking)
                    .col(entity::booking::Column::SlotId)
                    .col(entity::booking::Column::UserId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_invitation_inviting_invited_slot")
                    .table(Invitation)
                    .col(entity::invitation::Column::InvitingUserId)
                    .col(entity::invitation::Column::InvitedUserId)
                    .col(entity::invitation::Column::SlotId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_leaderboard_user_id_game_id")
                    .table(Leaderboard)
                    .col(entity::leaderboard::Column::UserId)
                    .col(entity::leaderboard::Column::GameId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then creates the indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
