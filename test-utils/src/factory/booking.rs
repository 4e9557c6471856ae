//! Booking factory for creating test booking entities.
//!
//! Inserts rows directly, bypassing the capacity and timing rules enforced by the
//! booking service. Use it to arrange state, not to exercise booking logic.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    slot_id: Uuid,
    user_id: Uuid,
    result: String,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, slot_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            slot_id,
            user_id,
            result: "pending".to_string(),
        }
    }

    /// Sets the stored result, one of `pending`, `win` or `loss`.
    pub fn result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            slot_id: ActiveValue::Set(self.slot_id),
            user_id: ActiveValue::Set(self.user_id),
            result: ActiveValue::Set(self.result),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking for the user in the slot.
pub async fn create_booking(
    db: &DatabaseConnection,
    slot_id: Uuid,
    user_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, slot_id, user_id).build().await
}
