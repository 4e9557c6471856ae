//! Invitation factory for creating test invitation entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a pending invitation from one user to another for the given slot.
///
/// # Arguments
/// - `db` - Database connection
/// - `inviting_user_id` - User sending the invitation
/// - `invited_user_id` - User receiving the invitation
/// - `slot` - Slot the invitation refers to; its game is recorded on the invitation
///
/// # Returns
/// - `Ok(entity::invitation::Model)` - Created invitation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invitation(
    db: &DatabaseConnection,
    inviting_user_id: Uuid,
    invited_user_id: Uuid,
    slot: &entity::slot::Model,
) -> Result<entity::invitation::Model, DbErr> {
    entity::invitation::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        inviting_user_id: ActiveValue::Set(inviting_user_id),
        invited_user_id: ActiveValue::Set(invited_user_id),
        slot_id: ActiveValue::Set(slot.id),
        game_id: ActiveValue::Set(slot.game_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
