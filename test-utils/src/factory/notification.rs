//! Notification factory for creating test notification entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test notifications.
///
/// Defaults to an unread notification created now.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            message: "Test notification".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(self.user_id),
            message: ActiveValue::Set(self.message),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
