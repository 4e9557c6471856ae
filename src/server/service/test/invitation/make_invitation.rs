use super::*;

/// Tests inviting another user to an open slot.
///
/// Expected: Ok(Uuid) of a stored invitation
#[tokio::test]
async fn creates_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;

    let service = InvitationService::new(db, ist());
    let invitation_id = service.make_invitation(invite(&host, &guest, &slot)).await?;

    let stored = InvitationRepository::new(db).get_by_id(invitation_id).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a user cannot invite themselves.
///
/// Expected: Err(BookingError::SelfInvite)
#[tokio::test]
async fn rejects_self_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, _) = factory::helpers::create_slot_with_players(db).await?;

    let service = InvitationService::new(db, ist());
    let result = service.make_invitation(invite(&host, &host, &slot)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SelfInvite))
    ));

    Ok(())
}

/// Tests that self invites are rejected even for a slot that does not exist.
///
/// Expected: Err(BookingError::SelfInvite) before any lookup
#[tokio::test]
async fn self_invite_checked_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = InvitationService::new(db, ist());
    let result = service
        .make_invitation(CreateInvitationParams {
            inviting_user_id: user.id,
            invited_user_id: user.id,
            slot_id: uuid::Uuid::new_v4(),
            game_id: uuid::Uuid::new_v4(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SelfInvite))
    ));

    Ok(())
}

/// Tests inviting the same user to the same slot twice before it is resolved.
///
/// Expected: Err(BookingError::AlreadyExists) on the second call
#[tokio::test]
async fn rejects_duplicate_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, host, guest) = factory::helpers::create_slot_with_players(db).await?;

    let service = InvitationService::new(db, ist());
    service.make_invitation(invite(&host, &guest, &slot)).await?;

    let result = service.make_invitation(invite(&host, &guest, &slot)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::AlreadyExists(_)))
    ));

    Ok(())
}

/// Tests inviting to a closed slot.
///
/// Expected: Err(BookingError::SlotFullyBooked)
#[tokio::test]
async fn rejects_fully_booked_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let slot = factory::slot::SlotFactory::new(db, game.id)
        .booked(true)
        .build()
        .await?;

    let service = InvitationService::new(db, ist());
    let result = service.make_invitation(invite(&host, &guest, &slot)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotFullyBooked))
    ));

    Ok(())
}

/// Tests inviting to a slot that already ended.
///
/// Expected: Err(BookingError::SlotPassed)
#[tokio::test]
async fn rejects_ended_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let slot = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::hours(-1))
        .build()
        .await?;

    let service = InvitationService::new(db, ist());
    let result = service.make_invitation(invite(&host, &guest, &slot)).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotPassed))
    ));

    Ok(())
}

/// Tests inviting to a slot that started but has not ended.
///
/// Only the end time is checked when inviting.
///
/// Expected: Ok(Uuid)
#[tokio::test]
async fn allows_running_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let slot = factory::slot::SlotFactory::new(db, game.id)
        .starts_in(Duration::minutes(-5))
        .build()
        .await?;

    let service = InvitationService::new(db, ist());

    assert!(service
        .make_invitation(invite(&host, &guest, &slot))
        .await
        .is_ok());

    Ok(())
}

/// Tests inviting to a slot that does not exist.
///
/// Expected: Err(AppError::ServiceErr) with root NotFound
#[tokio::test]
async fn wraps_missing_slot_as_service_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;

    let service = InvitationService::new(db, ist());
    let err = service
        .make_invitation(CreateInvitationParams {
            inviting_user_id: host.id,
            invited_user_id: guest.id,
            slot_id: uuid::Uuid::new_v4(),
            game_id: uuid::Uuid::new_v4(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err.root(), AppError::NotFound(_)));

    Ok(())
}
