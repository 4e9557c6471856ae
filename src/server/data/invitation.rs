//! Invitation data repository for database operations.
//!
//! Pending invitations are rows; resolving an invitation deletes its row.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::booking::BookingRepository,
    model::invitation::{CreateInvitationParams, Invitation, InvitationSummary},
};

/// Repository providing database operations for invitations.
pub struct InvitationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    /// Creates a new InvitationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `InvitationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending invitation.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The created invitation
    /// - `Err(DbErr)` - Database error during insert, including a duplicate
    ///   (inviting user, invited user, slot) triple
    pub async fn create(&self, params: CreateInvitationParams) -> Result<Invitation, DbErr> {
        let entity = entity::invitation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            inviting_user_id: ActiveValue::Set(params.inviting_user_id),
            invited_user_id: ActiveValue::Set(params.invited_user_id),
            slot_id: ActiveValue::Set(params.slot_id),
            game_id: ActiveValue::Set(params.game_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Invitation::from_entity(entity))
    }

    pub async fn get_by_id(&self, invitation_id: Uuid) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find_by_id(invitation_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Finds an outstanding invitation for the exact (inviting, invited, slot) triple.
    pub async fn get_by_triple(
        &self,
        inviting_user_id: Uuid,
        invited_user_id: Uuid,
        slot_id: Uuid,
    ) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::InvitingUserId.eq(inviting_user_id))
            .filter(entity::invitation::Column::InvitedUserId.eq(invited_user_id))
            .filter(entity::invitation::Column::SlotId.eq(slot_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Deletes an invitation by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Invitation deleted
    /// - `Ok(false)` - No invitation with that ID (already resolved)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, invitation_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Invitation::delete_by_id(invitation_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets invitations addressed to the user whose slot starts after `now`.
    ///
    /// Each summary carries the game name, slot timing, the usernames already booked in
    /// the slot, and the inviting user's username. Ordered by slot start time.
    ///
    /// # Arguments
    /// - `invited_user_id` - Invitee
    /// - `now` - Current instant
    ///
    /// # Returns
    /// - `Ok(Vec<InvitationSummary>)` - Pending invitations
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_pending_by_user(
        &self,
        invited_user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<InvitationSummary>, DbErr> {
        let rows: Vec<(entity::invitation::Model, entity::slot::Model)> =
            entity::prelude::Invitation::find()
                .find_also_related(entity::prelude::Slot)
                .filter(entity::invitation::Column::InvitedUserId.eq(invited_user_id))
                .filter(entity::slot::Column::StartTime.gt(now))
                .order_by_asc(entity::slot::Column::StartTime)
                .all(self.db)
                .await?
                .into_iter()
                .filter_map(|(invitation, slot)| slot.map(|slot| (invitation, slot)))
                .collect();

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let game_ids: Vec<Uuid> = rows.iter().map(|(_, slot)| slot.game_id).collect();
        let slot_ids: Vec<Uuid> = rows.iter().map(|(_, slot)| slot.id).collect();
        let inviter_ids: Vec<Uuid> = rows
            .iter()
            .map(|(invitation, _)| invitation.inviting_user_id)
            .collect();

        let game_names: HashMap<Uuid, String> = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(game_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|game| (game.id, game.name))
            .collect();

        let inviter_names: HashMap<Uuid, String> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(inviter_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        let booked_users = BookingRepository::new(self.db)
            .get_booked_usernames_by_slots(slot_ids)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(invitation, slot)| InvitationSummary {
                invitation_id: invitation.id,
                slot_id: slot.id,
                game_id: slot.game_id,
                game_name: game_names.get(&slot.game_id).cloned().unwrap_or_default(),
                date: slot.date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                booked_users: booked_users.get(&slot.id).cloned().unwrap_or_default(),
                invited_by: inviter_names
                    .get(&invitation.inviting_user_id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }
}
