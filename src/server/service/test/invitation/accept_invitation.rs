use super::*;

/// Tests accepting an invitation to an open slot.
///
/// Verifies that the invited user gets the booking and the invitation is removed.
///
/// Expected: Ok(Booking) for the invitee, invitation row gone
#[tokio::test]
async fn books_slot_for_invitee_and_deletes_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let service = InvitationService::new(db, ist());
    let booking = service.accept_invitation(invitation.id).await?;

    assert_eq!(booking.user_id, guest.id);
    assert_eq!(booking.slot_id, slot.id);
    assert!(InvitationRepository::new(db)
        .get_by_id(invitation.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests accepting after others filled the slot.
///
/// Expected: Err(BookingError::SlotFullyBooked) and the invitation row is gone
#[tokio::test]
async fn removes_invitation_when_slot_filled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    // Two other players fill the slot
    let booking_service = crate::server::service::booking::BookingService::new(db, ist());
    for _ in 0..2 {
        let other = factory::create_user(db).await?;
        booking_service
            .make_booking(other.id, slot.id, game.id)
            .await?;
    }

    let service = InvitationService::new(db, ist());
    let result = service.accept_invitation(invitation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotFullyBooked))
    ));
    assert!(InvitationRepository::new(db)
        .get_by_id(invitation.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests accepting when the invitee already booked the slot.
///
/// Expected: Err(BookingError::UserAlreadyBooked) and the invitation row is gone
#[tokio::test]
async fn removes_invitation_when_already_booked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    factory::create_booking(db, slot.id, guest.id).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let service = InvitationService::new(db, ist());
    let result = service.accept_invitation(invitation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::UserAlreadyBooked))
    ));
    assert!(InvitationRepository::new(db)
        .get_by_id(invitation.id)
        .await?
        .is_none());
    assert_eq!(BookingRepository::new(db).count_by_slot(slot.id).await?, 1);

    Ok(())
}

/// Tests accepting after the slot started.
///
/// The booking step refuses the started slot. Business rule failures from booking are
/// terminal, so the invitation is removed and the sentinel stays matchable.
///
/// Expected: Err(AppError::ServiceErr) with root SlotPassed, invitation row gone
#[tokio::test]
async fn removes_invitation_when_booking_rule_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let slot = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::minutes(-5))
        .build()
        .await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let service = InvitationService::new(db, ist());
    let err = service.accept_invitation(invitation.id).await.unwrap_err();

    assert!(matches!(err, AppError::ServiceErr { .. }));
    assert_eq!(err.booking_error(), Some(&BookingError::SlotPassed));
    assert!(InvitationRepository::new(db)
        .get_by_id(invitation.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests accepting when the booking step fails for a reason other than a booking rule.
///
/// The game row is removed underneath the slot, so the slot lookup succeeds and the game
/// lookup inside the booking transaction fails. Such failures are retryable and leave
/// the invitation pending.
///
/// Expected: Err(AppError::ServiceErr) with no BookingError root, invitation row kept
#[tokio::test]
async fn keeps_invitation_when_booking_fails_unexpectedly() -> Result<(), AppError> {
    use sea_orm::{ConnectionTrait, EntityTrait};

    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::Game::delete_by_id(game.id).exec(db).await?;

    let service = InvitationService::new(db, ist());
    let err = service.accept_invitation(invitation.id).await.unwrap_err();

    assert!(matches!(err, AppError::ServiceErr { .. }));
    assert!(err.booking_error().is_none());
    assert!(matches!(err.root(), AppError::NotFound(_)));
    assert!(InvitationRepository::new(db)
        .get_by_id(invitation.id)
        .await?
        .is_some());
    assert_eq!(BookingRepository::new(db).count_by_slot(slot.id).await?, 0);

    Ok(())
}

/// Tests that accepting an invitation notifies the inviter.
///
/// Expected: one unread notification for the host naming the guest and "accepted"
#[tokio::test]
async fn notifies_inviter_on_accept() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let service = InvitationService::new(db, ist());
    service.accept_invitation(invitation.id).await?;

    let notifications = NotificationRepository::new(db).get_by_user(host.id).await?;
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].is_read);
    assert!(notifications[0].message.contains(&guest.username));
    assert!(notifications[0].message.contains("accepted"));
    assert!(NotificationRepository::new(db)
        .get_by_user(guest.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that a failed acceptance does not notify the inviter.
///
/// Expected: Err(BookingError::SlotFullyBooked) and no notification for the host
#[tokio::test]
async fn does_not_notify_inviter_when_accept_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let slot = factory::slot::SlotFactory::new(db, game.id)
        .booked(true)
        .build()
        .await?;
    let invitation = factory::create_invitation(db, host.id, guest.id, &slot).await?;

    let service = InvitationService::new(db, ist());
    let result = service.accept_invitation(invitation.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotFullyBooked))
    ));
    assert!(NotificationRepository::new(db)
        .get_by_user(host.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests accepting an invitation that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = InvitationService::new(db, ist());
    let result = service.accept_invitation(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
