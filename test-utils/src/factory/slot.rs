//! Slot factory for creating test slot entities.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test slots.
///
/// Slots default to a 20 minute window starting one hour from now so they are open
/// for booking and invitations.
///
/// # Example
///
/// ```rust,ignore
/// let slot = SlotFactory::new(&db, game.id)
///     .starts_in(Duration::minutes(-10))
///     .build()
///     .await?;
/// ```
pub struct SlotFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: Uuid,
    date: Option<NaiveDate>,
    start_time: DateTime<Utc>,
    length: Duration,
    is_booked: bool,
}

impl<'a> SlotFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, game_id: Uuid) -> Self {
        Self {
            db,
            game_id,
            date: None,
            start_time: Utc::now() + Duration::hours(1),
            length: Duration::minutes(20),
            is_booked: false,
        }
    }

    /// Overrides the calendar date, which otherwise follows the UTC date of the start.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the start relative to now. Negative offsets create slots in the past.
    pub fn starts_in(mut self, offset: Duration) -> Self {
        self.start_time = Utc::now() + offset;
        self
    }

    pub fn length(mut self, length: Duration) -> Self {
        self.length = length;
        self
    }

    pub fn booked(mut self, is_booked: bool) -> Self {
        self.is_booked = is_booked;
        self
    }

    /// Builds and inserts the slot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::slot::Model)` - Created slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::slot::Model, DbErr> {
        entity::slot::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            game_id: ActiveValue::Set(self.game_id),
            date: ActiveValue::Set(self.date.unwrap_or(self.start_time.date_naive())),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + self.length),
            is_booked: ActiveValue::Set(self.is_booked),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open slot for the game starting in one hour.
pub async fn create_slot(
    db: &DatabaseConnection,
    game_id: Uuid,
) -> Result<entity::slot::Model, DbErr> {
    SlotFactory::new(db, game_id).build().await
}
