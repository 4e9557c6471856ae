//! Invitation service for inviting users to slots and resolving invitations.
//!
//! An invitation is pending while its row exists. Rejecting it, accepting it, or finding
//! it stale at acceptance deletes the row. The inviter gets an inbox notification when
//! the invitee accepts or rejects.

use chrono::FixedOffset;
use sea_orm::{ConnectionTrait, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{invitation::InvitationRepository, slot::SlotRepository, user::UserRepository},
    error::{booking::BookingError, AppError, DbResultExt},
    model::{
        booking::Booking,
        invitation::{CreateInvitationParams, Invitation, InvitationSummary},
    },
    service::{booking::BookingService, notification::NotificationService, slot::SlotService},
    util::time::now_in,
};

/// Service providing business logic for invitations.
pub struct InvitationService<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
    offset: FixedOffset,
}

impl<'a, C: ConnectionTrait + TransactionTrait> InvitationService<'a, C> {
    /// Creates a new InvitationService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `offset` - Reference time zone for "now"
    ///
    /// # Returns
    /// - `InvitationService` - New service instance
    pub fn new(db: &'a C, offset: FixedOffset) -> Self {
        Self { db, offset }
    }

    /// Invites a user to a slot.
    ///
    /// # Arguments
    /// - `params` - Inviting user, invited user, slot and game
    ///
    /// # Returns
    /// - `Ok(Uuid)` - ID of the new invitation
    /// - `Err(BookingError::SelfInvite)` - Inviting and invited user are the same
    /// - `Err(BookingError::AlreadyExists)` - Same invitation is already pending
    /// - `Err(AppError::ServiceErr)` - Slot lookup failed (wraps `NotFound`)
    /// - `Err(AppError::BadRequest)` - Slot belongs to a different game
    /// - `Err(BookingError::SlotFullyBooked)` - Slot is closed
    /// - `Err(BookingError::SlotPassed)` - Slot has already ended
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn make_invitation(&self, params: CreateInvitationParams) -> Result<Uuid, AppError> {
        if params.inviting_user_id == params.invited_user_id {
            return Err(BookingError::SelfInvite.into());
        }

        let invitation_repo = InvitationRepository::new(self.db);

        let existing = invitation_repo
            .get_by_triple(
                params.inviting_user_id,
                params.invited_user_id,
                params.slot_id,
            )
            .await
            .db_context("failed to check existing invitation")?;
        if existing.is_some() {
            return Err(
                BookingError::AlreadyExists("Invitation already sent".to_string()).into(),
            );
        }

        let slot = SlotService::new(self.db, self.offset)
            .get_slot(params.slot_id)
            .await
            .map_err(AppError::service("failed to fetch slot for invitation"))?;

        if slot.game_id != params.game_id {
            return Err(AppError::BadRequest(format!(
                "Slot {} does not belong to game {}",
                slot.id, params.game_id
            )));
        }

        if slot.is_booked {
            return Err(BookingError::SlotFullyBooked.into());
        }

        if slot.end_time < now_in(self.offset) {
            return Err(BookingError::SlotPassed.into());
        }

        match invitation_repo.create(params).await {
            Ok(invitation) => Ok(invitation.id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Err(
                BookingError::AlreadyExists("Invitation already sent".to_string()).into(),
            ),
            Err(err) => Err(AppError::db("failed to insert invitation", err)),
        }
    }

    /// Gets an invitation by its ID.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The pending invitation
    /// - `Err(AppError::NotFound)` - No pending invitation with that ID
    pub async fn get_invitation(&self, invitation_id: Uuid) -> Result<Invitation, AppError> {
        InvitationRepository::new(self.db)
            .get_by_id(invitation_id)
            .await
            .db_context("failed to fetch invitation")?
            .ok_or_else(|| AppError::NotFound(format!("Invitation {} not found", invitation_id)))
    }

    /// Accepts an invitation by booking the slot for the invited user.
    ///
    /// The invitation is deleted when the booking succeeds and when the slot is closed or
    /// already booked by the invitee. If the booking itself fails, the invitation is
    /// deleted when the failure is a business rule (slot passed, filled by a concurrent
    /// booking) and kept when it is an infrastructure failure, so the invitee can retry.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking created for the invited user
    /// - `Err(AppError::NotFound)` - No pending invitation with that ID
    /// - `Err(BookingError::SlotFullyBooked)` - Slot is closed
    /// - `Err(BookingError::UserAlreadyBooked)` - Invitee already booked the slot
    /// - `Err(AppError::ServiceErr)` - Slot lookup or booking creation failed
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn accept_invitation(&self, invitation_id: Uuid) -> Result<Booking, AppError> {
        let invitation = self.get_invitation(invitation_id).await?;

        let slot = SlotService::new(self.db, self.offset)
            .get_slot(invitation.slot_id)
            .await
            .map_err(AppError::service("failed to fetch slot for invitation"))?;

        if slot.is_booked {
            self.delete(invitation_id).await?;
            return Err(BookingError::SlotFullyBooked.into());
        }

        let booking_service = BookingService::new(self.db, self.offset);

        let existing = booking_service
            .get_booking_by_user_and_slot(invitation.invited_user_id, slot.id)
            .await?;
        if existing.is_some() {
            self.delete(invitation_id).await?;
            return Err(BookingError::UserAlreadyBooked.into());
        }

        let booking = match booking_service
            .make_booking(invitation.invited_user_id, slot.id, invitation.game_id)
            .await
        {
            Ok(booking) => booking,
            Err(err) => {
                if err.booking_error().is_some() {
                    self.delete(invitation_id).await?;
                }
                return Err(AppError::service("failed to book invitation")(err));
            }
        };

        self.delete(invitation_id).await?;

        tracing::debug!(
            "Invitation {} accepted as booking {}",
            invitation_id,
            booking.id
        );

        self.notify_inviter(&invitation, "accepted").await;

        Ok(booking)
    }

    /// Rejects an invitation by deleting it and notifying the inviter.
    ///
    /// Rejecting an invitation that no longer exists succeeds without changes.
    pub async fn reject_invitation(&self, invitation_id: Uuid) -> Result<(), AppError> {
        let invitation = InvitationRepository::new(self.db)
            .get_by_id(invitation_id)
            .await
            .db_context("failed to fetch invitation")?;

        let Some(invitation) = invitation else {
            tracing::debug!("Invitation {} was already resolved", invitation_id);
            return Ok(());
        };

        if !self.delete(invitation_id).await? {
            tracing::debug!("Invitation {} was already resolved", invitation_id);
            return Ok(());
        }

        self.notify_inviter(&invitation, "rejected").await;

        Ok(())
    }

    /// Gets invitations addressed to the user whose slot has not started yet.
    pub async fn get_all_pending_invitations(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<InvitationSummary>, AppError> {
        InvitationRepository::new(self.db)
            .get_pending_by_user(user_id, now_in(self.offset).to_utc())
            .await
            .db_context("failed to fetch pending invitations")
    }

    async fn delete(&self, invitation_id: Uuid) -> Result<bool, AppError> {
        InvitationRepository::new(self.db)
            .delete(invitation_id)
            .await
            .db_context("failed to delete invitation")
    }

    /// Tells the inviter how the invitee resolved their invitation.
    ///
    /// The invitation is already resolved at this point, so a failure is logged rather
    /// than returned.
    async fn notify_inviter(&self, invitation: &Invitation, outcome: &str) {
        if let Err(err) = self.write_inviter_notification(invitation, outcome).await {
            tracing::warn!(
                "Failed to notify user {} about invitation {}: {}",
                invitation.inviting_user_id,
                invitation.id,
                err
            );
        }
    }

    async fn write_inviter_notification(
        &self,
        invitation: &Invitation,
        outcome: &str,
    ) -> Result<(), AppError> {
        let invitee = UserRepository::new(self.db)
            .find_by_id(invitation.invited_user_id)
            .await
            .db_context("failed to fetch invited user")?
            .map(|user| user.username)
            .unwrap_or_else(|| "A player".to_string());

        let slot = SlotRepository::new(self.db)
            .get_by_id(invitation.slot_id)
            .await
            .db_context("failed to fetch invited slot")?;

        let message = match slot {
            Some(slot) => {
                let start = slot.start_time.with_timezone(&self.offset);
                format!(
                    "{} {} your invitation for the {} slot on {}",
                    invitee,
                    outcome,
                    start.format("%H:%M"),
                    slot.date
                )
            }
            None => format!("{} {} your invitation", invitee, outcome),
        };

        NotificationService::new(self.db)
            .notify(invitation.inviting_user_id, message)
            .await?;

        Ok(())
    }
}
