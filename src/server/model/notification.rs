//! Notification domain model.
//!
//! Notifications are written to a user's inbox when someone resolves an invitation
//! they sent.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            message: self.message,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}
