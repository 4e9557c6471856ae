use super::*;

/// Tests finding an existing booking for a user in a slot.
///
/// Expected: Ok(Some(Booking))
#[tokio::test]
async fn finds_existing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, user, _) = factory::helpers::create_slot_with_players(db).await?;
    let created = factory::create_booking(db, slot.id, user.id).await?;

    let repo = BookingRepository::new(db);
    let found = repo.get_by_user_and_slot(user.id, slot.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests that another user's booking in the same slot is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_users_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, slot, first, second) = factory::helpers::create_slot_with_players(db).await?;
    factory::create_booking(db, slot.id, first.id).await?;

    let repo = BookingRepository::new(db);
    let found = repo.get_by_user_and_slot(second.id, slot.id).await?;

    assert!(found.is_none());

    Ok(())
}
