//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::notification::Notification;

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an unread notification for the user.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `message` - Text shown in the inbox
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: Uuid, message: String) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            message: ActiveValue::Set(message),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    pub async fn get_by_id(&self, notification_id: Uuid) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Gets every notification of the user, newest first.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification belongs to the user and is now read
    /// - `Ok(false)` - No notification with that ID for this user
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let update = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(update.rows_affected > 0)
    }
}
