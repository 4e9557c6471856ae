//! Notification service for the per-user inbox.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::notification::NotificationRepository,
    error::{AppError, DbResultExt},
    model::notification::Notification,
};

pub struct NotificationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds an unread notification to the user's inbox.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The stored notification
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn notify(&self, user_id: Uuid, message: String) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .create(user_id, message)
            .await
            .db_context("failed to create notification")
    }

    /// Gets the user's notifications, newest first.
    pub async fn get_user_notifications(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, AppError> {
        NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await
            .db_context("failed to fetch notifications")
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification is read
    /// - `Err(AppError::NotFound)` - No such notification in the user's inbox
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_as_read(&self, user_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_read(notification_id, user_id)
            .await
            .db_context("failed to mark notification as read")?;

        if !updated {
            return Err(AppError::NotFound(format!(
                "Notification {} not found",
                notification_id
            )));
        }

        Ok(())
    }
}
